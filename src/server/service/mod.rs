//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validating parameters and enforcing ownership and verification rules
//! - **Orchestration**: Coordinating repository calls, which in turn keep the caches current
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod card;
pub mod cart;
pub mod collection;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Loads the user a token was issued to.
///
/// # Returns
/// - `Ok(User)` - User exists
/// - `Err(AppError::AuthErr(UserNotFound))` - No user with that id
pub(crate) async fn require_user(db: &DatabaseConnection, user_id: i32) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AuthError::UserNotFound(user_id).into())
}

/// Loads the user a token was issued to and requires them to be verified.
///
/// # Returns
/// - `Ok(User)` - Verified user
/// - `Err(AppError::AuthErr(UserNotFound))` - No user with that id
/// - `Err(AppError::AuthErr(NotVerified))` - User isn't verified
pub(crate) async fn require_verified(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<User, AppError> {
    let user = require_user(db, user_id).await?;

    if !user.verified {
        return Err(AuthError::NotVerified(user_id).into());
    }

    Ok(user)
}
