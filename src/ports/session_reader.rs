//! Session reader port.
//!
//! The platform records every issued access token in a session table.
//! A token whose signature verifies but which has no session row
//! (logged out, revoked, issued by another environment) must be refused.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Find the user owning the session issued for `token`.
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError>;
}
