use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Request carried neither an `Authorization: Bearer` header nor a `token` cookie.
    #[error("Request is missing an authentication token")]
    MissingToken,

    /// Token failed signature, issuer or expiry validation.
    #[error("Invalid authentication token: {0}")]
    InvalidToken(String),

    /// Token names a user id that no longer exists in the database.
    #[error("User {0} from authentication token not found in database")]
    UserNotFound(i32),

    /// User has not verified their account.
    #[error("User {0} is not verified")]
    NotVerified(i32),

    /// User is authenticated but lacks a required permission.
    ///
    /// Second field describes the denied action for server-side logs.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown username or a wrong password.
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Signing a token or hashing a password failed.
    #[error("Failed to process credentials: {0}")]
    Credentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to HTTP status codes and client-facing messages:
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "incorrect username or password"
/// - `NotVerified` → 403 Forbidden
/// - `AccessDenied` → 403 Forbidden
/// - `Credentials` → 500 Internal Server Error
///
/// Details are logged at debug level while the messages returned to clients stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "unauthorized")
            }
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "incorrect username or password")
            }
            Self::NotVerified(_) => (StatusCode::FORBIDDEN, "user is not verified"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "insufficient permissions"),
            Self::Credentials(err) => {
                tracing::error!("Credential processing failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
