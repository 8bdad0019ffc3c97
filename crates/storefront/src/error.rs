//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Error responses use the JSON envelope the upstream commerce API already
//! speaks: `{ "ok": false, "message": "..." }`, with an extra `detail` field
//! when the upstream could not be reached at all.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::upstream::{GATEWAY_ERROR_MESSAGE, UpstreamError};

/// Application-level error type for the storefront gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Talking to the upstream commerce API failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; client errors stay local
        if matches!(
            self,
            Self::Internal(_)
                | Self::Upstream(
                    UpstreamError::Connect(_) | UpstreamError::Body(_) | UpstreamError::Payload(_)
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Upstream(err) => match err {
                UpstreamError::Status { status, .. } => *status,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Upstream(err) => match err {
                UpstreamError::Connect(source) | UpstreamError::Body(source) => json!({
                    "ok": false,
                    "message": GATEWAY_ERROR_MESSAGE,
                    "detail": source.to_string(),
                }),
                UpstreamError::Payload(_) => json!({
                    "ok": false,
                    "message": "Invalid upstream response",
                }),
                // The upstream already shaped its error reply; relay it
                UpstreamError::Status { body, .. } => body.clone(),
                UpstreamError::Build(_) => json!({
                    "ok": false,
                    "message": "Upstream client error",
                }),
            },
            Self::BadRequest(message) | Self::Unauthorized(message) => json!({
                "ok": false,
                "message": message,
            }),
            // Don't expose internal error details to clients
            Self::Internal(_) => json!({
                "ok": false,
                "message": "Internal server error",
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn body_json(response: Response) -> serde_json::Value {
        let body = read_body(response);
        serde_json::from_slice(&body).unwrap()
    }

    fn read_body(response: Response) -> axum::body::Bytes {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime
            .block_on(axum::body::to_bytes(response.into_body(), usize::MAX))
            .unwrap()
    }

    #[test]
    fn test_bad_request_envelope() {
        let response = AppError::BadRequest("invalid status".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response);
        assert_eq!(body["ok"], false);
        assert_eq!(body["message"], "invalid status");
    }

    #[test]
    fn test_unauthorized_status() {
        let response = AppError::Unauthorized("Login required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_upstream_status_and_body_pass_through() {
        let err = AppError::Upstream(UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
            body: json!({ "ok": false, "message": "product not found" }),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response);
        assert_eq!(body["message"], "product not found");
    }

    #[test]
    fn test_internal_hides_details() {
        let response = AppError::Internal("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response);
        assert_eq!(body["message"], "Internal server error");
    }
}
