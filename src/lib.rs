//! portfolio-demo: a small task service for demonstrating container probes.
//!
//! Serves a fixed record set of tasks as JSON, a health endpoint for liveness
//! and readiness probes, and status/info endpoints that report the process
//! configuration and the orchestration environment it runs in.

pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod tasks;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
pub use tasks::{Task, TaskStore};

/// Builds the application router from a loaded configuration and the seeded
/// record set.
pub fn build_app(config: AppConfig) -> Result<axum::Router, AppError> {
    let tera = templates::init_templates()?;
    tracing::info!("Initialized templates");

    let tasks = TaskStore::seeded()?;
    tracing::info!(count = tasks.all().len(), "Loaded task records");

    let state = AppState::new(config, tera, tasks);
    Ok(create_router(state))
}
