//! Ticketing reader port.
//!
//! Read-only lookups of the records that decide whether a user may see
//! hotel data. Absence is `Ok(None)`; `Err` means the store itself failed.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketTypeId, UserId};
use crate::domain::ticketing::{Enrollment, Ticket, TicketType};

#[async_trait]
pub trait TicketingReader: Send + Sync {
    /// Get the enrollment owned by a user.
    async fn find_enrollment_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// Get the ticket that governs an enrollment's eligibility.
    ///
    /// When several tickets exist, implementations return the most recently
    /// created one (ties broken by highest id).
    async fn find_first_ticket_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;

    /// Get a ticket type by id.
    async fn find_ticket_type(
        &self,
        id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError>;
}
