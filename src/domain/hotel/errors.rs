//! Hotel access error types.
//!
//! One flat taxonomy covering every way a hotel request can be refused.
//! Each variant is produced at the step of the eligibility chain that
//! detects it and travels unchanged to the HTTP layer.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NoEnrollment | 404 |
//! | NoTicket | 404 |
//! | TicketNotPaid | 402 |
//! | HotelNotIncluded | 402 |
//! | NoHotels | 404 |
//! | HotelNotFound | 404 |
//! | Unexpected | 400 |

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Reasons a user may not see hotel data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotelAccessError {
    /// The user never enrolled in the event.
    #[error("No enrollment")]
    NoEnrollment,

    /// The enrollment has no ticket attached.
    #[error("No ticket")]
    NoTicket,

    /// The ticket exists but payment has not been confirmed.
    #[error("Ticket is not paid")]
    TicketNotPaid,

    /// The ticket is remote or its type does not bundle a hotel stay.
    #[error("This type of ticket does not include hotel")]
    HotelNotIncluded,

    /// The store holds no hotels at all.
    #[error("No hotels")]
    NoHotels,

    /// The requested hotel does not exist.
    #[error("This hotelId does not exist")]
    HotelNotFound,

    /// Anything outside the taxonomy above (store failures, dangling references).
    #[error("{0}")]
    Unexpected(String),
}

impl HotelAccessError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        HotelAccessError::Unexpected(message.into())
    }

    /// Stable machine-readable classification tag.
    pub fn code(&self) -> &'static str {
        match self {
            HotelAccessError::NoEnrollment => "NO_ENROLLMENT",
            HotelAccessError::NoTicket => "NO_TICKET",
            HotelAccessError::TicketNotPaid => "TICKET_NOT_PAID",
            HotelAccessError::HotelNotIncluded => "HOTEL_NOT_INCLUDED",
            HotelAccessError::NoHotels => "NO_HOTELS",
            HotelAccessError::HotelNotFound => "HOTEL_NOT_FOUND",
            HotelAccessError::Unexpected(_) => "BAD_REQUEST",
        }
    }

    /// Human-readable description.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for failures that mean "something the user needs is missing".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HotelAccessError::NoEnrollment
                | HotelAccessError::NoTicket
                | HotelAccessError::NoHotels
                | HotelAccessError::HotelNotFound
        )
    }

    /// True for failures the user can resolve by buying or upgrading a ticket.
    pub fn is_payment_required(&self) -> bool {
        matches!(
            self,
            HotelAccessError::TicketNotPaid | HotelAccessError::HotelNotIncluded
        )
    }
}

impl From<DomainError> for HotelAccessError {
    fn from(err: DomainError) -> Self {
        HotelAccessError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn codes_are_stable() {
        assert_eq!(HotelAccessError::NoEnrollment.code(), "NO_ENROLLMENT");
        assert_eq!(HotelAccessError::NoTicket.code(), "NO_TICKET");
        assert_eq!(HotelAccessError::TicketNotPaid.code(), "TICKET_NOT_PAID");
        assert_eq!(HotelAccessError::HotelNotIncluded.code(), "HOTEL_NOT_INCLUDED");
        assert_eq!(HotelAccessError::NoHotels.code(), "NO_HOTELS");
        assert_eq!(HotelAccessError::HotelNotFound.code(), "HOTEL_NOT_FOUND");
    }

    #[test]
    fn messages_describe_the_failure() {
        assert_eq!(HotelAccessError::TicketNotPaid.message(), "Ticket is not paid");
        assert_eq!(
            HotelAccessError::HotelNotIncluded.message(),
            "This type of ticket does not include hotel"
        );
        assert_eq!(
            HotelAccessError::unexpected("boom").message(),
            "boom"
        );
    }

    #[test]
    fn classification_is_exclusive() {
        let all = [
            HotelAccessError::NoEnrollment,
            HotelAccessError::NoTicket,
            HotelAccessError::TicketNotPaid,
            HotelAccessError::HotelNotIncluded,
            HotelAccessError::NoHotels,
            HotelAccessError::HotelNotFound,
            HotelAccessError::unexpected("x"),
        ];
        for err in all {
            assert!(!(err.is_not_found() && err.is_payment_required()), "{:?}", err);
        }
        assert!(!HotelAccessError::unexpected("x").is_not_found());
        assert!(!HotelAccessError::unexpected("x").is_payment_required());
    }

    #[test]
    fn domain_error_becomes_unexpected() {
        let err: HotelAccessError = DomainError::new(ErrorCode::DatabaseError, "down").into();
        assert_eq!(err, HotelAccessError::Unexpected("[DATABASE_ERROR] down".to_string()));
    }
}
