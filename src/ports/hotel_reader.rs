//! Hotel reader port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::hotel::{Hotel, HotelWithRooms};

/// Read-only access to hotels and their rooms.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// List every hotel, ordered by id. An empty list is a valid result.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Get a hotel with all its rooms embedded.
    ///
    /// Returns `None` if no hotel has this id.
    async fn find_hotel_with_rooms(
        &self,
        id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError>;
}
