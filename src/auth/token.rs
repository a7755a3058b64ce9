use crate::config::Config;
use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
///
/// `sub` is optional at the type level so that a structurally valid token
/// missing its subject claim can be rejected with a dedicated error instead of
/// a generic deserialization failure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Issues and verifies signed bearer tokens (HMAC-SHA256).
///
/// The signing key and ttl come from `Config` at construction time; the
/// service never reads the environment. One instance is shared across all
/// requests and is read-only after startup.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: chrono::Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::Duration::minutes(ttl_minutes),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_minutes)
    }

    /// Issues a signed token for the given subject, expiring `ttl` from now.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(self.ttl)
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token and returns its subject.
    ///
    /// Fails with `Unauthorized` if the token is malformed, its signature is
    /// invalid, it has expired, or its payload carries no subject claim. The
    /// payload is never inspected before the signature checks out.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        // Decode failures convert to Unauthorized("Invalid token: ...")
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())?.claims;

        match claims.sub {
            Some(subject) if !subject.is_empty() => Ok(subject),
            _ => Err(AppError::Unauthorized(
                "Token is missing a subject claim".into(),
            )),
        }
    }
}
