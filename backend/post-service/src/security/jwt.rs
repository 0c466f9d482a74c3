/// Bearer token issuing and validation (HS256)
use crate::config::JwtConfig;
use crate::error::{AppError, Result};
use crate::models::User;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub email: String,
    pub username: String,
}

impl Claims {
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Signing and verification keys derived from the shared secret
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl JwtKeys {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.ttl_secs,
        }
    }

    /// Sign a token for `user`. A lifetime that overflows the clock is an
    /// upstream failure, never a panic.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let exp = Duration::try_seconds(self.ttl_secs)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::upstream("Token lifetime out of range"))?;

        let claims = Claims {
            sub: user.id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            email: user.email.clone(),
            username: user.username.clone(),
        };

        Ok(encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry
    pub fn validate(
        &self,
        token: &str,
    ) -> std::result::Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}
