//! Database configuration
//!
//! The service only reads the platform's tables, so the pool is small and
//! gives up quickly: a request waiting on a connection longer than
//! `acquire_timeout_secs` fails instead of queueing behind the request
//! timeout.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Unprefixed variable the rest of the platform (and Prisma) reads.
pub const PLATFORM_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Longest acquire wait accepted; beyond this the request timeout fires first.
const MAX_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL URL of the platform database.
    ///
    /// Falls back to `DATABASE_URL` when `EVENT_HOTELS__DATABASE__URL` is unset.
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds a request may wait for a pooled connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    /// The platform-wide `DATABASE_URL`, if set and non-blank.
    pub fn platform_url() -> Option<String> {
        std::env::var(PLATFORM_DATABASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.acquire_timeout_secs == 0 || self.acquire_timeout_secs > MAX_ACQUIRE_TIMEOUT_SECS {
            return Err(ValidationError::InvalidAcquireTimeout(MAX_ACQUIRE_TIMEOUT_SECS));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_max_lifetime() -> u64 {
    1800
}
