//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Readers over the platform database
//! - `memory` - In-memory store for tests and local runs
//! - `auth` - Bearer token validation
//! - `http` - axum routes, middleware and the application router

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use http::{app_router, HotelAppState};
pub use memory::InMemoryHotelStore;
pub use postgres::{PostgresHotelReader, PostgresSessionReader, PostgresTicketingReader};
