//! Health check endpoint for container orchestration.
//!
//! Used as both the liveness and readiness probe. The handler depends on no
//! external resource, so it answers "healthy" whenever the process can serve
//! HTTP at all.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::host;
use crate::state::AppState;

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub hostname: String,
    pub version: String,
}

/// Health check handler.
#[instrument(name = "health::health", skip(state), level = "debug")]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY,
        timestamp: host::timestamp(),
        hostname: host::hostname(),
        version: state.config.app.version.clone(),
    })
}
