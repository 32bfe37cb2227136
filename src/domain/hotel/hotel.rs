//! Hotel and room read models.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HotelId, RoomId, Timestamp};

/// A partner hotel offered to in-person ticket holders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// Image URL shown in the hotel picker.
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A bookable room belonging to exactly one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Number of guests the room sleeps.
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel together with all of its rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel, rooms: Vec<Room>) -> Self {
        Self { hotel, rooms }
    }
}
