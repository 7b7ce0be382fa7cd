//! Application error type mapping to HTTP status codes and a JSON body.
//!
//! Pipeline failures must reach the page as visible errors: a failed
//! completion is a non-2xx response, never a fabricated assistant turn.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use datasage_types::error::{ChatError, StorageError, UpstreamError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Pipeline errors (storage or upstream).
    Chat(ChatError),
    /// Malformed request.
    Validation(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Chat(ChatError::Storage(StorageError::Connection)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "database connection unavailable".to_string(),
            ),
            AppError::Chat(ChatError::Storage(e)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
            }
            AppError::Chat(ChatError::Upstream(UpstreamError::AuthenticationFailed)) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH",
                "completion endpoint rejected the credential".to_string(),
            ),
            AppError::Chat(ChatError::Upstream(UpstreamError::Timeout)) => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                "completion endpoint timed out".to_string(),
            ),
            AppError::Chat(ChatError::Upstream(e)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        };

        let body = json!({
            "data": null,
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
