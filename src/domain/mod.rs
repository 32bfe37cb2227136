//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth and error types)
//! - `ticketing` - Enrollments, tickets and ticket types
//! - `hotel` - Hotels, rooms and the hotel access error taxonomy

pub mod foundation;
pub mod hotel;
pub mod ticketing;
