//! Application error type mapping to HTTP status codes.
//!
//! Local failures render as `{"errors": [{"code", "message"}]}`. Remote
//! failures are proxied: the remote status and raw body are returned as-is.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use notebook_bridge_types::error::{ParamError, RelayError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Admin gate rejected the request.
    Unauthorized(String),
    /// Malformed or out-of-range route parameter.
    Validation(String),
    /// No API route matches the request path.
    NotFound(String),
    /// Outcome of the relayed remote call.
    Relay(RelayError),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl From<ParamError> for AppError {
    fn from(e: ParamError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Relay(RelayError::Remote { status, body }) => {
                return remote_response(status, body);
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            AppError::Validation(msg) => {
                tracing::warn!(
                    code = "VALIDATION_ERROR",
                    message = %msg,
                    "Rejected request parameters"
                );
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::NotFound(msg) => {
                tracing::warn!(code = "NOT_FOUND", message = %msg, "Unknown API route");
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            AppError::Relay(e @ RelayError::MissingCredential) => {
                (StatusCode::UNAUTHORIZED, "MISSING_CREDENTIAL", e.to_string())
            }
            AppError::Relay(e @ RelayError::Timeout(_)) => {
                (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT", e.to_string())
            }
            AppError::Relay(e @ RelayError::Transport(_)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE", e.to_string())
            }
            AppError::Relay(e @ RelayError::Decode(_)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_INVALID_RESPONSE", e.to_string())
            }
            AppError::Relay(e @ RelayError::InvalidOperation) => {
                tracing::error!(
                    code = "INTERNAL_ERROR",
                    message = %e,
                    "Invalid remote call descriptor"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", e.to_string())
            }
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (status, [(CONTENT_TYPE, "application/json")], body.to_string()).into_response()
    }
}

/// Hand a remote failure back unchanged.
fn remote_response(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = if serde_json::from_str::<serde_json::Value>(&body).is_ok() {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };
    (status, [(CONTENT_TYPE, content_type)], body).into_response()
}
