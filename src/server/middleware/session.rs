//! Token-based request identity.
//!
//! `AuthSession` resolves the caller's user id from a signed token carried in the
//! `Authorization: Bearer` header or, failing that, the `token` cookie. Extraction
//! never rejects: routes that don't need a user simply ignore it, and `AuthGuard`
//! turns a missing or invalid token into the matching error.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::{
    error::auth::AuthError,
    service::auth::token::{IssuedToken, TokenService},
    state::AppState,
};

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Caller identity resolved from the request's token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    identity: Result<i32, AuthError>,
}

impl AuthSession {
    /// Identity of a caller who presented a valid token for `user_id`.
    pub fn authenticated(user_id: i32) -> Self {
        Self {
            identity: Ok(user_id),
        }
    }

    /// Identity of a caller who presented no usable token.
    pub fn anonymous(reason: AuthError) -> Self {
        Self {
            identity: Err(reason),
        }
    }

    /// Id of the authenticated user.
    ///
    /// # Returns
    /// - `Ok(i32)` - Token was valid
    /// - `Err(AuthError::MissingToken | InvalidToken)` - Why the caller is anonymous
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.identity.clone()
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts).or_else(|| cookie_token(parts)) else {
            return Ok(Self::anonymous(AuthError::MissingToken));
        };

        Ok(match state.tokens.verify(&token) {
            Ok(user_id) => Self::authenticated(user_id),
            Err(err) => Self::anonymous(err),
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// HTTP-only cookie carrying a freshly issued token.
pub fn token_cookie(issued: &IssuedToken) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, issued.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(TokenService::LIFETIME_HOURS))
        .build()
}
