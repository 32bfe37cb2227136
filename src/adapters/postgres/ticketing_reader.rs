//! PostgreSQL implementation of TicketingReader.
//!
//! Reads the platform's Prisma-managed tables. Prisma stores `DateTime`
//! fields as `timestamp(3)` without zone, always written in UTC.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, EnrollmentId, TicketId, TicketTypeId, Timestamp, UserId,
};
use crate::domain::ticketing::{Enrollment, Ticket, TicketStatus, TicketType};
use crate::ports::TicketingReader;

/// PostgreSQL implementation of the TicketingReader port.
pub struct PostgresTicketingReader {
    pool: PgPool,
}

impl PostgresTicketingReader {
    /// Creates a new PostgresTicketingReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct TicketTypeRow {
    id: i32,
    name: String,
    is_remote: bool,
    includes_hotel: bool,
}

pub(super) fn utc(dt: NaiveDateTime) -> Timestamp {
    Timestamp::from_datetime(dt.and_utc())
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            id: EnrollmentId::new(row.id),
            user_id: UserId::new(row.user_id),
        }
    }
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: TicketId::new(row.id),
            enrollment_id: EnrollmentId::new(row.enrollment_id),
            ticket_type_id: TicketTypeId::new(row.ticket_type_id),
            status: row.status.parse::<TicketStatus>()?,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        TicketType {
            id: TicketTypeId::new(row.id),
            name: row.name,
            is_remote: row.is_remote,
            includes_hotel: row.includes_hotel,
        }
    }
}

#[async_trait]
impl TicketingReader for PostgresTicketingReader {
    async fn find_enrollment_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT id, "userId" AS user_id
            FROM "Enrollment"
            WHERE "userId" = $1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get enrollment", e))?;

        Ok(row.map(Enrollment::from))
    }

    async fn find_first_ticket_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT id,
                   "enrollmentId" AS enrollment_id,
                   "ticketTypeId" AS ticket_type_id,
                   status::text AS status,
                   "createdAt" AS created_at,
                   "updatedAt" AS updated_at
            FROM "Ticket"
            WHERE "enrollmentId" = $1
            ORDER BY "createdAt" DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(enrollment_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get ticket", e))?;

        row.map(Ticket::try_from).transpose()
    }

    async fn find_ticket_type(
        &self,
        id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        let row: Option<TicketTypeRow> = sqlx::query_as(
            r#"
            SELECT id, name, "isRemote" AS is_remote, "includesHotel" AS includes_hotel
            FROM "TicketType"
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get ticket type", e))?;

        Ok(row.map(TicketType::from))
    }
}
