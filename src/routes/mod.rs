//! HTTP route handlers.
//!
//! Routes are grouped by how they may be cached. Probe and API responses are
//! marked `no-store` so an orchestrator or dashboard always sees live values;
//! the home page and static assets get public cache lifetimes.
//!
//! Request tracing is enabled via middleware that assigns a request ID to each
//! incoming request, allowing correlation of all logs within a request.

pub mod api;
pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::{cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_NO_STORE, CACHE_CONTROL_STATIC};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for paths no route matches.
async fn not_found(uri: Uri) -> AppError {
    AppError::PageNotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Probes and API - never cached
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/api/status", get(api::status))
        .route("/api/tasks", get(api::list_tasks))
        .route("/api/tasks/{id}", get(api::get_task))
        .route("/api/info", get(api::info))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    let static_routes = Router::new()
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(home_routes)
        .merge(api_routes)
        .merge(static_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
