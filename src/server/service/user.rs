//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::user::User, service::require_user};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the profile of the authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::AuthErr(UserNotFound))` - The id from the token has no user
    pub async fn by_id(&self, user_id: i32) -> Result<User, AppError> {
        require_user(self.db, user_id).await
    }
}
