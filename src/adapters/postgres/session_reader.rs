//! PostgreSQL implementation of SessionReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SessionReader;

/// Looks up issued access tokens in the `Session` table.
pub struct PostgresSessionReader {
    pool: PgPool,
}

impl PostgresSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionReader for PostgresSessionReader {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT "userId"
            FROM "Session"
            WHERE token = $1
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get session", e))?;

        Ok(row.map(|(user_id,)| UserId::new(user_id)))
    }
}
