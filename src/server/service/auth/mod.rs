//! Registration and login.
//!
//! This module provides the `AuthService` for creating accounts and exchanging
//! credentials for signed session tokens. Passwords are stored as Argon2id hashes.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::Caches,
    data::{
        cart::CartRepository,
        user::{NewUser, UserRepository},
    },
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, RegisterParams, User},
    service::auth::{
        password::{hash_password, verify_password},
        token::{IssuedToken, TokenService},
    },
};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub caches: &'a Caches,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `caches` - Caches shared by the repositories
    /// - `tokens` - Token signer
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches, tokens: &'a TokenService) -> Self {
        Self { db, caches, tokens }
    }

    /// Registers a new unverified user with an empty cart.
    ///
    /// An email address may be shared with unverified accounts but not with a
    /// verified one.
    ///
    /// # Arguments
    /// - `params` - Username, email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid fields, taken username or taken email
    /// - `Err(AppError::DbErr | CacheErr)` - Storage failure
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        params.validate()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::BadRequest("username already taken".to_string()));
        }

        if user_repo
            .find_verified_by_email(&params.email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("email already in use".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .save(NewUser {
                username: params.username,
                email: params.email,
                password_hash,
            })
            .await?;

        CartRepository::new(self.db, self.caches)
            .save(user.id)
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Exchanges a username and password for a signed token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token and its expiry
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<IssuedToken, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(&params.username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self.tokens.issue(user.id)?;

        tracing::debug!("User {} logged in", user.id);

        Ok(issued)
    }
}
