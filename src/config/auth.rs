//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum signing-secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Authentication configuration (platform-issued HS256 tokens)
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Shared secret the sign-in service signs access tokens with
    pub jwt_secret: SecretString,

    /// Reject tokens that have no row in the `Session` table
    #[serde(default = "default_require_session")]
    pub require_session: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// The secret is always required; production additionally enforces a
    /// minimum length.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }

        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            require_session: default_require_session(),
        }
    }
}

fn default_require_session() -> bool {
    true
}
