//! Event Hotels - hotel listings for event ticket holders.
//!
//! Serves `GET /hotels` and `GET /hotels/:hotelId` to users whose paid,
//! in-person ticket includes accommodation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
