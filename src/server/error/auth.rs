use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The gateway did not forward an authenticated identity.
    ///
    /// Either the actor id or the actor role header is absent. Results in a
    /// 401 Unauthorized response.
    #[error("Request is missing the authenticated actor header {0}")]
    MissingIdentity(&'static str),

    /// The forwarded identity could not be understood.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid authenticated actor header: {0}")]
    InvalidIdentity(String),

    /// The actor is authenticated but not allowed to act on the resource.
    ///
    /// Results in a 403 Forbidden response that carries no detail beyond
    /// "Not authorized"; the reason is only logged.
    #[error("Actor {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingIdentity` / `InvalidIdentity` → 401 Unauthorized with "Authentication required"
/// - `AccessDenied` → 403 Forbidden with "Not authorized"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity(_) | Self::InvalidIdentity(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Not authorized".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
