//! HotelEligibility - the shared decision chain gating hotel data.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::hotel::HotelAccessError;
use crate::ports::TicketingReader;

use super::store_failure;

/// Runs the eligibility chain against the ticketing store.
///
/// Order is fixed and each step short-circuits:
/// 1. enrollment exists, else `NoEnrollment`
/// 2. a ticket exists for it, else `NoTicket`
/// 3. the ticket is paid, else `TicketNotPaid`
/// 4. its type is in-person and includes a hotel, else `HotelNotIncluded`
#[derive(Clone)]
pub struct HotelEligibility {
    ticketing: Arc<dyn TicketingReader>,
}

impl HotelEligibility {
    pub fn new(ticketing: Arc<dyn TicketingReader>) -> Self {
        Self { ticketing }
    }

    pub async fn ensure_eligible(&self, user_id: &UserId) -> Result<(), HotelAccessError> {
        let enrollment = self
            .ticketing
            .find_enrollment_by_user(user_id)
            .await
            .map_err(store_failure)?
            .ok_or(HotelAccessError::NoEnrollment)?;

        let ticket = self
            .ticketing
            .find_first_ticket_by_enrollment(&enrollment.id)
            .await
            .map_err(store_failure)?
            .ok_or(HotelAccessError::NoTicket)?;

        ticket.ensure_paid()?;

        let ticket_type = self
            .ticketing
            .find_ticket_type(&ticket.ticket_type_id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| {
                tracing::error!(
                    ticket_id = %ticket.id,
                    ticket_type_id = %ticket.ticket_type_id,
                    "Ticket references a missing ticket type"
                );
                HotelAccessError::unexpected(format!(
                    "Ticket type {} not found",
                    ticket.ticket_type_id
                ))
            })?;

        ticket_type.ensure_includes_hotel()
    }
}
