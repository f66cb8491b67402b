use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::tasks::TaskStoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Task not found")]
    TaskNotFound(u64),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Invalid task records: {0}")]
    Records(#[from] TaskStoreError),
}

/// JSON error body returned by the API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TaskNotFound(_) | AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) | AppError::Records(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::TaskNotFound(id) => {
                tracing::debug!(task_id = id, "Task lookup missed");
                let body = ErrorBody {
                    error: self.to_string(),
                };
                return (status, Json(body)).into_response();
            }
            AppError::PageNotFound(_) => "Page not found".to_string(),
            _ => {
                tracing::error!("Internal error: {:?}", self);
                "Internal server error".to_string()
            }
        };

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <div class="container">
        <div class="error-page">
            <h1>Error {}</h1>
            <p>{}</p>
            <a href="/">Return to homepage</a>
        </div>
    </div>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_found_message() {
        assert_eq!(AppError::TaskNotFound(99).to_string(), "Task not found");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::TaskNotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::PageNotFound("/nope".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Template(tera::Error::msg("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(TaskStoreError::DuplicateId(2)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_task_not_found_response_is_json() {
        let response = AppError::TaskNotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("application/json"));
    }

    #[test]
    fn test_internal_error_response_is_html() {
        let response = AppError::Template(tera::Error::msg("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }
}
