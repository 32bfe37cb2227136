//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresTicketingReader` - Enrollment, ticket and ticket type lookups
//! - `PostgresHotelReader` - Hotel listing and hotel-with-rooms lookup
//! - `PostgresSessionReader` - Issued session lookup for token validation

mod hotel_reader;
mod session_reader;
mod ticketing_reader;

pub use hotel_reader::PostgresHotelReader;
pub use session_reader::PostgresSessionReader;
pub use ticketing_reader::PostgresTicketingReader;
