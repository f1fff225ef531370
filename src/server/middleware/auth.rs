use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Requirement checked against the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// User confirmed ownership of their account.
    Verified,
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a AuthSession,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a AuthSession) -> Self {
        Self { db, session }
    }

    /// Resolves the caller and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Caller is authenticated and holds every permission
    /// - `Err(AuthError::MissingToken | InvalidToken)` - No valid token
    /// - `Err(AuthError::UserNotFound)` - Token names a user that doesn't exist
    /// - `Err(AuthError::NotVerified)` - `Verified` required but user isn't verified
    /// - `Err(AuthError::AccessDenied)` - `Admin` required but user isn't an admin
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.session.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Verified => {
                    if !user.verified {
                        return Err(AuthError::NotVerified(user_id).into());
                    }
                }
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to manage cards without admin permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
