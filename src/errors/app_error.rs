//! HTTP-facing application errors.
//!
//! The relay deliberately collapses every upstream failure class into a
//! single 500 response carrying an `error` field: the operations it fronts
//! are user-initiated and non-critical, so there is no retry policy and no
//! structured error code surface. Request-shape problems map to 400.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::core::retell::RetellError;

/// Errors surfaced by the relay HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// The vendor API answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The vendor API could not be reached at all.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The inbound request body was unusable.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Server-side configuration problem detected at request time.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for relay handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<RetellError> for AppError {
    fn from(err: RetellError) -> Self {
        match err {
            RetellError::Status { status, body } => AppError::UpstreamStatus { status, body },
            RetellError::Http(msg) => AppError::Upstream(msg),
            RetellError::InvalidConfiguration(msg) => AppError::Config(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Transport failures and vendor-side rejections both read as a
            // generic relay failure to the browser.
            AppError::UpstreamStatus { .. } | AppError::Upstream(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_maps_to_500() {
        let err = AppError::UpstreamStatus {
            status: 402,
            body: "payment required".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("missing agent_id".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn retell_transport_error_converts_to_upstream() {
        let err: AppError = RetellError::Http("connection refused".to_string()).into();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
