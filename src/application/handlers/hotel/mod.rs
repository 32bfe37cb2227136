//! Hotel query handlers.
//!
//! ## Queries
//! - List hotels for an eligible ticket holder
//! - Get a single hotel with its rooms for an eligible ticket holder
//!
//! Both share [`HotelEligibility`], the ordered chain of checks that gates
//! hotel data. Only the terminal lookup differs.

mod eligibility;
mod get_hotel;
mod list_hotels;

#[cfg(test)]
mod testing;

pub use eligibility::HotelEligibility;
pub use get_hotel::{GetHotelHandler, GetHotelQuery};
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery};

use crate::domain::foundation::DomainError;
use crate::domain::hotel::HotelAccessError;

/// Logs a store failure and folds it into the unclassified error bucket.
fn store_failure(err: DomainError) -> HotelAccessError {
    tracing::error!(error = %err, "Store lookup failed");
    HotelAccessError::from(err)
}
