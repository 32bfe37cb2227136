//! Shared-secret JWT adapter for the platform's own access tokens.
//!
//! The sign-in flow issues HS256 tokens whose payload carries the numeric
//! `userId` and records each token in the `Session` table. This adapter
//! implements the `SessionValidator` port by:
//!
//! 1. Verifying the signature with the shared secret
//! 2. Honouring `exp` when the token carries one (it is not required)
//! 3. Optionally confirming a live session exists for the token
//!
//! # Example
//!
//! ```ignore
//! let validator = JwtSessionValidator::new(&config.auth.jwt_secret)
//!     .with_session_reader(Arc::new(PostgresSessionReader::new(pool.clone())));
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionReader, SessionValidator};

/// Claims carried by platform access tokens.
#[derive(Debug, Deserialize)]
struct PlatformClaims {
    #[serde(rename = "userId")]
    user_id: i32,
}

/// Validates HS256 platform tokens.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Option<Arc<dyn SessionReader>>,
}

impl JwtSessionValidator {
    /// Create a validator for tokens signed with `secret`.
    pub fn new(secret: &SecretString) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions: None,
        }
    }

    /// Also require a session row for every accepted token.
    pub fn with_session_reader(mut self, sessions: Arc<dyn SessionReader>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    fn decode_claims(&self, token: &str) -> Result<PlatformClaims, AuthError> {
        decode::<PlatformClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })
    }

    async fn confirm_session(&self, token: &str, user_id: UserId) -> Result<(), AuthError> {
        let Some(sessions) = &self.sessions else {
            return Ok(());
        };

        let owner = sessions.find_user_by_token(token).await.map_err(|e| {
            tracing::error!(error = %e, "Session lookup failed");
            AuthError::service_unavailable(e.message)
        })?;

        match owner {
            None => Err(AuthError::SessionNotFound),
            Some(owner) if owner != user_id => {
                tracing::warn!(
                    token_user = %user_id,
                    session_user = %owner,
                    "Session owner does not match token subject"
                );
                Err(AuthError::InvalidToken)
            }
            Some(_) => Ok(()),
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;
        let user_id = UserId::new(claims.user_id);

        self.confirm_session(token, user_id).await?;

        Ok(AuthenticatedUser::new(user_id))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("session_check", &self.sessions.is_some())
            .finish_non_exhaustive()
    }
}
