//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs whose subject is the buyer's [`UserId`] (`"user_N"`). The service only
//! verifies them; [`AuthKeys::issue`] exists for tests and the demo binary.

use crate::model::UserId;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<UserId, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Access token required")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Failed to generate token: {0}")]
    Issue(#[from] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl AuthKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, user: UserId) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.to_string(),
            exp: (now + self.ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify JWT token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Extracts and verifies the token of an `Authorization: Bearer <token>` header value.
    pub fn verify_header(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let token = header
            .and_then(|h| h.split_whitespace().nth(1))
            .ok_or(AuthError::MissingToken)?;
        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let keys = AuthKeys::new("secret", 1);
        let token = keys.issue(UserId(7)).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "user_7");
        assert_eq!(claims.user_id().unwrap(), UserId(7));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn foreign_or_expired_tokens_are_invalid() {
        let token = AuthKeys::new("other", 1).issue(UserId(1)).unwrap();
        assert!(matches!(
            AuthKeys::new("secret", 1).verify(&token),
            Err(AuthError::InvalidToken)
        ));

        let expired = AuthKeys::new("secret", -2).issue(UserId(1)).unwrap();
        assert!(matches!(
            AuthKeys::new("secret", 1).verify(&expired),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn header_without_token_is_missing() {
        let keys = AuthKeys::new("secret", 1);
        assert!(matches!(
            keys.verify_header(None),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            keys.verify_header(Some("Bearer")),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            keys.verify_header(Some("Bearer garbage")),
            Err(AuthError::InvalidToken)
        ));
    }
}
