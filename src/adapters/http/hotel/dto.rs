//! HTTP DTOs for hotel endpoints.
//!
//! Field names follow the JSON the web client already consumes: camelCase,
//! with the embedded room list under a capitalised `Rooms` key.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::hotel::{Hotel, HotelAccessError, HotelWithRooms, Room};

fn timestamp(ts: &Timestamp) -> String {
    ts.as_datetime().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A hotel as listed by `GET /hotels`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Hotel> for HotelResponse {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id.as_i32(),
            name: hotel.name.clone(),
            image: hotel.image.clone(),
            created_at: timestamp(&hotel.created_at),
            updated_at: timestamp(&hotel.updated_at),
        }
    }
}

/// A room embedded in [`HotelDetailResponse`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_i32(),
            name: room.name.clone(),
            capacity: room.capacity,
            hotel_id: room.hotel_id.as_i32(),
            created_at: timestamp(&room.created_at),
            updated_at: timestamp(&room.updated_at),
        }
    }
}

/// Response for `GET /hotels/:hotelId`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<&HotelWithRooms> for HotelDetailResponse {
    fn from(detail: &HotelWithRooms) -> Self {
        Self {
            hotel: HotelResponse::from(&detail.hotel),
            rooms: detail.rooms.iter().map(RoomResponse::from).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable classification, e.g. `NO_ENROLLMENT`.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

impl From<&HotelAccessError> for ErrorResponse {
    fn from(err: &HotelAccessError) -> Self {
        Self::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HotelId, RoomId};
    use chrono::{TimeZone, Utc};

    fn ts() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2023, 2, 7, 16, 58, 12).unwrap())
    }

    fn hotel() -> Hotel {
        Hotel {
            id: HotelId::new(1),
            name: "hotel 1".to_string(),
            image: "https://example.com/h1.png".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn room() -> Room {
        Room {
            id: RoomId::new(10),
            name: "101".to_string(),
            capacity: 3,
            hotel_id: HotelId::new(1),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn hotel_response_uses_camel_case_and_millisecond_timestamps() {
        let json = serde_json::to_value(HotelResponse::from(&hotel())).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "hotel 1");
        assert_eq!(json["createdAt"], "2023-02-07T16:58:12.000Z");
        assert_eq!(json["updatedAt"], "2023-02-07T16:58:12.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn detail_response_embeds_rooms_under_capitalised_key() {
        let detail = HotelWithRooms::new(hotel(), vec![room()]);

        let json = serde_json::to_value(HotelDetailResponse::from(&detail)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["image"], "https://example.com/h1.png");
        let rooms = json["Rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0]["hotelId"], 1);
        assert_eq!(rooms[0]["capacity"], 3);
        assert!(json.get("rooms").is_none());
    }

    #[test]
    fn detail_response_with_no_rooms_has_empty_array() {
        let detail = HotelWithRooms::new(hotel(), vec![]);

        let json = serde_json::to_value(HotelDetailResponse::from(&detail)).unwrap();

        assert_eq!(json["Rooms"], serde_json::json!([]));
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let json = serde_json::to_value(ErrorResponse::from(&HotelAccessError::TicketNotPaid))
            .unwrap();

        assert_eq!(json["error_code"], "TICKET_NOT_PAID");
        assert_eq!(json["message"], "Ticket is not paid");
    }
}
