//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Access Ports
//!
//! - `TicketingReader` - Enrollment, ticket and ticket type lookups
//! - `HotelReader` - Hotel listing and hotel-with-rooms lookup
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token validation
//! - `SessionReader` - Issued session lookup backing token validation

mod hotel_reader;
mod session_reader;
mod session_validator;
mod ticketing_reader;

pub use hotel_reader::HotelReader;
pub use session_reader::SessionReader;
pub use session_validator::SessionValidator;
pub use ticketing_reader::TicketingReader;
