//! In-memory adapters for tests and local development.

mod hotel_store;

pub use hotel_store::InMemoryHotelStore;
