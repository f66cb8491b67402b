//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::tasks::TaskStore;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything in here is built once at startup and never mutated, so handlers
/// read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub tasks: Arc<TaskStore>,
}

impl AppState {
    /// Creates a new application state from the given configuration, templates, and record set.
    pub fn new(config: AppConfig, tera: Tera, tasks: TaskStore) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            tasks: Arc::new(tasks),
        }
    }
}
