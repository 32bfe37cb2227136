//! Ticket read model and payment status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketId, TicketTypeId, Timestamp};
use crate::domain::hotel::HotelAccessError;

/// Payment state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Seat held, payment pending.
    Reserved,
    /// Payment confirmed.
    Paid,
}

impl TicketStatus {
    /// Returns the store representation (`RESERVED` / `PAID`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, TicketStatus::Paid)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(DomainError::invalid_data(format!(
                "Invalid ticket status value: {}",
                other
            ))),
        }
    }
}

/// A ticket attached to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    /// Fails with `TicketNotPaid` unless payment has been confirmed.
    ///
    /// Only the status is consulted; the ticket type is not needed.
    pub fn ensure_paid(&self) -> Result<(), HotelAccessError> {
        if self.status.is_paid() {
            Ok(())
        } else {
            Err(HotelAccessError::TicketNotPaid)
        }
    }
}
