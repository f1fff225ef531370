//! User domain models and parameters.
//!
//! Provides the user model resolved from a session token, and the parameter types
//! for registration and login. Registration parameters carry their own validation.

use crate::{
    model::{
        auth::{LoginDto, RegisterDto},
        user::PrivateUserInfoDto,
    },
    server::error::AppError,
};

/// Registered user with role flags.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub email: String,
    pub is_admin: bool,
    /// Whether the user confirmed ownership of their account.
    pub verified: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            email: entity.email,
            is_admin: entity.is_admin,
            verified: entity.verified,
        }
    }

    /// Converts the user into the profile DTO visible to its owner.
    ///
    /// The id is serialized as a string.
    pub fn into_private_dto(self) -> PrivateUserInfoDto {
        PrivateUserInfoDto {
            id: self.id.to_string(),
            username: self.username,
            is_admin: self.is_admin,
            verified: self.verified,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }

    /// Checks username length, email shape and password length.
    ///
    /// # Returns
    /// - `Ok(())` - Parameters are valid
    /// - `Err(AppError::BadRequest)` - First failing rule
    pub fn validate(&self) -> Result<(), AppError> {
        let username_len = self.username.chars().count();
        if !(4..=20).contains(&username_len) {
            return Err(AppError::BadRequest(
                "username must be between 4 and 20 characters".to_string(),
            ));
        }

        if !is_valid_email(&self.email) {
            return Err(AppError::BadRequest("invalid email".to_string()));
        }

        let password_len = self.password.chars().count();
        if !(8..=20).contains(&password_len) {
            return Err(AppError::BadRequest(
                "password must be between 8 and 20 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parameters for logging in.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
