use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    /// Between 4 and 20 characters.
    pub username: String,
    pub email: String,
    /// Between 8 and 20 characters.
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Signed session token returned by a successful login.
///
/// The same token is also set as the `token` cookie.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub expire: DateTime<Utc>,
}
