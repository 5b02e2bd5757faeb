//! Admin and caller credential extractors.
//!
//! - [`AdminAccess`] runs the admin gate on the `X-Admin-Key` header and
//!   rejects with 401 before the handler body (and any remote call) runs.
//! - [`CallerToken`] reads an optional `Authorization: Bearer <token>` header
//!   whose token is forwarded to the remote service in place of the default
//!   credential.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use secrecy::SecretString;

use notebook_bridge_core::gate::ADMIN_KEY_HEADER;
use notebook_bridge_types::error::GateError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Admitted-admin marker. Extracting this runs the admin gate.
pub struct AdminAccess;

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let verdict = match parts.headers.get(ADMIN_KEY_HEADER) {
            None => state.gate.admit(None),
            Some(value) => match value.to_str() {
                Ok(presented) => state.gate.admit(Some(presented)),
                // A non-UTF-8 value can never equal the secret.
                Err(_) => Err(GateError::Mismatch),
            },
        };

        match verdict {
            Ok(()) => Ok(AdminAccess),
            Err(err) => {
                tracing::warn!(path = %parts.uri.path(), reason = %err, "Admin gate rejected request");
                let message = match err {
                    GateError::Missing => "Missing admin key. Provide it via the 'X-Admin-Key' header.",
                    GateError::Mismatch => "Invalid admin key.",
                };
                Err(AppError::Unauthorized(message.to_string()))
            }
        }
    }
}

/// Caller-supplied bearer token, `None` when absent, blank, or not Bearer.
pub struct CallerToken(pub Option<SecretString>);

impl<S: Send + Sync> FromRequestParts<S> for CallerToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CallerToken(bearer_token(&parts.headers)))
    }
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<SecretString> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(SecretString::from(token))
}
