//! Signed session tokens.
//!
//! Tokens are HS256 JWTs carrying the user id in the `id` claim and the configured
//! realm as issuer.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: i32,
    iss: String,
    iat: i64,
    exp: i64,
}

/// Token together with the moment it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expire: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    realm: String,
    lifetime: Duration,
}

impl TokenService {
    /// Tokens stay valid for one hour.
    pub const LIFETIME_HOURS: i64 = 1;

    /// Creates a token service signing with `secret`.
    ///
    /// # Arguments
    /// - `secret` - HMAC signing key
    /// - `realm` - Issuer written into and required from every token
    pub fn new(secret: &str, realm: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            realm: realm.to_string(),
            lifetime: Duration::hours(Self::LIFETIME_HOURS),
        }
    }

    /// Signs a token for a user.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token and its expiry
    /// - `Err(AuthError::Credentials)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expire = now + self.lifetime;
        let claims = Claims {
            id: user_id,
            iss: self.realm.clone(),
            iat: now.timestamp(),
            exp: expire.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Credentials(e.to_string()))?;

        Ok(IssuedToken { token, expire })
    }

    /// Validates a token's signature, issuer and expiry.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the user the token was issued to
    /// - `Err(AuthError::InvalidToken)` - Token rejected
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.realm.as_str()]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims.id)
    }
}
