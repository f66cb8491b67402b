//! JSON API handlers: application status, task queries and environment info.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;
use tracing::instrument;

use crate::config::UPTIME_LABEL;
use crate::error::AppError;
use crate::host;
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::tasks::Task;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub app_name: String,
    pub version: String,
    pub environment: String,
    pub hostname: String,
    pub timestamp: String,
    pub uptime: &'static str,
}

/// Application status handler.
#[instrument(name = "api::status", skip(state))]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let app = &state.config.app;
    Json(StatusResponse {
        app_name: app.name.clone(),
        version: app.version.clone(),
        environment: app.environment.clone(),
        hostname: host::hostname(),
        timestamp: host::timestamp(),
        uptime: UPTIME_LABEL,
    })
}

/// Name of the query parameter that filters the task listing.
pub const STATUS_PARAM: &str = "status";

/// First value of `name` in a decoded query string.
///
/// Repeated parameters are legal in a query string; only the first counts.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Handler for the task listing, optionally filtered by status.
#[instrument(
    name = "api::list_tasks",
    skip(state, params),
    fields(status = tracing::field::Empty)
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let status = first_param(&params, STATUS_PARAM);
    tracing::Span::current().record("status", status);
    let list = state.tasks.list(status);
    tracing::debug!(count = list.count, "Listed tasks");
    Json(list).into_response()
}

/// Handler for a single task by id.
#[instrument(name = "api::get_task", skip(state, request_id))]
pub async fn get_task(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, AppError> {
    match state.tasks.get(id) {
        Some(task) => Ok(Json(task.clone())),
        None => {
            tracing::info!(request_id = %request_id.0, task_id = id, "Task not found");
            Err(AppError::TaskNotFound(id))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub kubernetes: KubernetesInfo,
    pub container: ContainerInfo,
    pub application: ApplicationInfo,
}

#[derive(Debug, Serialize)]
pub struct KubernetesInfo {
    pub namespace: String,
    pub pod_name: String,
    pub service_account: String,
}

#[derive(Debug, Serialize)]
pub struct ContainerInfo {
    pub hostname: String,
    pub environment: String,
}

#[derive(Debug, Serialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: String,
}

/// Environment info handler.
#[instrument(name = "api::info", skip(state))]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let config = &state.config;
    Json(InfoResponse {
        kubernetes: KubernetesInfo {
            namespace: config.kubernetes.namespace.clone(),
            pod_name: config.kubernetes.pod_name.clone(),
            service_account: config.kubernetes.service_account.clone(),
        },
        container: ContainerInfo {
            hostname: host::hostname(),
            environment: config.app.environment.clone(),
        },
        application: ApplicationInfo {
            name: config.app.name.clone(),
            version: config.app.version.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_param_takes_first_of_repeated() {
        let params = pairs(&[("status", "completed"), ("status", "pending")]);
        assert_eq!(first_param(&params, STATUS_PARAM), Some("completed"));
    }

    #[test]
    fn test_first_param_skips_other_keys() {
        let params = pairs(&[("page", "2"), ("status", "pending")]);
        assert_eq!(first_param(&params, STATUS_PARAM), Some("pending"));
        assert_eq!(first_param(&pairs(&[("page", "2")]), STATUS_PARAM), None);
        assert_eq!(first_param(&[], STATUS_PARAM), None);
    }
}
