//! Ticket type read model and hotel entitlement rule.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TicketTypeId;
use crate::domain::hotel::HotelAccessError;

/// A category of ticket defining attendance mode and hotel entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Online attendance; never entitled to a hotel.
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    /// True only for in-person tickets that bundle a hotel stay.
    pub fn grants_hotel_access(&self) -> bool {
        !self.is_remote && self.includes_hotel
    }

    pub fn ensure_includes_hotel(&self) -> Result<(), HotelAccessError> {
        if self.grants_hotel_access() {
            Ok(())
        } else {
            Err(HotelAccessError::HotelNotIncluded)
        }
    }
}
