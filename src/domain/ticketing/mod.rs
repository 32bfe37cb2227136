//! Ticketing domain - enrollments, tickets and ticket types.
//!
//! Read-only from this service's perspective: registration and checkout
//! flows elsewhere on the platform own their lifecycle.

mod enrollment;
mod ticket;
mod ticket_type;

pub use enrollment::Enrollment;
pub use ticket::{Ticket, TicketStatus};
pub use ticket_type::TicketType;
