//! HTTP adapter for the hotel module.
//!
//! # Endpoints
//!
//! - `GET /hotels` - List every hotel for an eligible ticket holder
//! - `GET /hotels/:hotelId` - One hotel with its rooms
//!
//! Both require a Bearer token (see `middleware::auth`).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{HotelApiError, HotelAppState};
pub use routes::hotel_router;
