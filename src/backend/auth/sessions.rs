/**
 * Session Tokens
 *
 * Issues signed JWT session tokens from a user record.
 *
 * The payload carries exactly `user_id` and `username`. No expiration is
 * set; session lifetime belongs to whoever verifies the token.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::backend::error::BackendResult;
use crate::shared::{AppConfig, ConfigError};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub user_id: i64,
    /// Username
    pub username: String,
}

impl From<&User> for Claims {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
        }
    }
}

/// Signs and checks session tokens with a single HMAC secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer from a signing secret
    ///
    /// # Errors
    ///
    /// `Config` if the secret is blank.
    pub fn new(secret: &str) -> BackendResult<Self> {
        if secret.trim().is_empty() {
            tracing::error!("Missing signing secret");
            return Err(ConfigError::MissingValue(crate::shared::config::SECRET_KEY_VAR).into());
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Create an issuer from `config.secret_key`
    pub fn from_config(config: &AppConfig) -> BackendResult<Self> {
        Self::new(config.require_secret_key()?)
    }

    /// Create a JWT token for a user
    ///
    /// Fields of `user` other than `user_id` and `username` are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use globetrotter::backend::auth::{TokenIssuer, User};
    ///
    /// let issuer = TokenIssuer::new("s3cret").unwrap();
    /// let token = issuer.issue(&User::new(1, "ada")).unwrap();
    /// let claims = issuer.verify(&token).unwrap();
    /// assert_eq!(claims.username, "ada");
    /// ```
    pub fn issue(&self, user: &User) -> BackendResult<String> {
        let claims = Claims::from(user);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        tracing::debug!("Issued session token for user {}", claims.user_id);
        Ok(token)
    }

    /// Verify a token's signature and decode its claims
    pub fn verify(&self, token: &str) -> BackendResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation())?;
        Ok(token_data.claims)
    }
}

// Tokens carry no `exp`, so none is required.
fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation
}
