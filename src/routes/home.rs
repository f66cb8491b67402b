//! Home page handler.
//!
//! Renders the configuration values and the current record set server-side; the
//! bundled script then keeps the status panel and task filter live via the API.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::error::AppError;
use crate::host;
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::tasks::TaskStatus;

#[instrument(name = "home::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppError> {
    let statuses: Vec<&str> = TaskStatus::ALL.iter().map(TaskStatus::as_str).collect();

    let mut context = tera::Context::new();
    context.insert("app", &state.config.app);
    context.insert("kubernetes", &state.config.kubernetes);
    context.insert("hostname", &host::hostname());
    context.insert("timestamp", &host::timestamp());
    context.insert("tasks", state.tasks.all());
    context.insert("statuses", &statuses);

    let html = state.tera.render("index.html", &context).map_err(|e| {
        tracing::error!(request_id = %request_id.0, error = %e, "Failed to render home page");
        AppError::from(e)
    })?;
    Ok(Html(html))
}
