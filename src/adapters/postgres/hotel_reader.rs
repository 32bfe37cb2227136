//! PostgreSQL implementation of HotelReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, HotelId, RoomId};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

use super::ticketing_reader::utc;

/// PostgreSQL implementation of the HotelReader port.
pub struct PostgresHotelReader {
    pool: PgPool,
}

impl PostgresHotelReader {
    /// Creates a new PostgresHotelReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: HotelId::new(row.id),
            name: row.name,
            image: row.image,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        }
    }
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId::new(row.id),
            name: row.name,
            capacity: row.capacity,
            hotel_id: HotelId::new(row.hotel_id),
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        }
    }
}

#[async_trait]
impl HotelReader for PostgresHotelReader {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list hotels", e))?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_hotel_with_rooms(
        &self,
        id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel: Option<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get hotel", e))?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, "hotelId" AS hotel_id,
                   "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY id ASC
            "#,
        )
        .bind(id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list rooms", e))?;

        Ok(Some(HotelWithRooms::new(
            Hotel::from(hotel),
            rooms.into_iter().map(Room::from).collect(),
        )))
    }
}
