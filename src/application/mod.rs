//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The hotel slice is read-only, so only query handlers exist.

pub mod handlers;

pub use handlers::hotel::{
    GetHotelHandler, GetHotelQuery, HotelEligibility, ListHotelsHandler, ListHotelsQuery,
};
