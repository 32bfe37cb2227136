//! In-Memory Hotel Store Adapter
//!
//! Holds enrollments, tickets, ticket types, hotels and rooms in memory and
//! implements both reader ports with the same ordering rules as Postgres.
//! Useful for testing and local development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, Timestamp, UserId,
};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::domain::ticketing::{Enrollment, Ticket, TicketStatus, TicketType};
use crate::ports::{HotelReader, TicketingReader};

#[derive(Debug, Default)]
struct Tables {
    next_id: i32,
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    ticket_types: Vec<TicketType>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

impl Tables {
    /// One sequence shared by every table.
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory store for the ticketing and hotel tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryHotelStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_enrollment(&self, user_id: UserId) -> Enrollment {
        let mut tables = self.tables.write().await;
        let enrollment = Enrollment {
            id: EnrollmentId::new(tables.next_id()),
            user_id,
        };
        tables.enrollments.push(enrollment.clone());
        enrollment
    }

    pub async fn insert_ticket_type(
        &self,
        name: impl Into<String>,
        is_remote: bool,
        includes_hotel: bool,
    ) -> TicketType {
        let mut tables = self.tables.write().await;
        let ticket_type = TicketType {
            id: TicketTypeId::new(tables.next_id()),
            name: name.into(),
            is_remote,
            includes_hotel,
        };
        tables.ticket_types.push(ticket_type.clone());
        ticket_type
    }

    pub async fn insert_ticket(
        &self,
        enrollment_id: EnrollmentId,
        ticket_type_id: TicketTypeId,
        status: TicketStatus,
    ) -> Ticket {
        let mut tables = self.tables.write().await;
        let now = Timestamp::now();
        let ticket = Ticket {
            id: TicketId::new(tables.next_id()),
            enrollment_id,
            ticket_type_id,
            status,
            created_at: now,
            updated_at: now,
        };
        tables.tickets.push(ticket.clone());
        ticket
    }

    pub async fn insert_hotel(&self, name: impl Into<String>, image: impl Into<String>) -> Hotel {
        let mut tables = self.tables.write().await;
        let now = Timestamp::now();
        let hotel = Hotel {
            id: HotelId::new(tables.next_id()),
            name: name.into(),
            image: image.into(),
            created_at: now,
            updated_at: now,
        };
        tables.hotels.push(hotel.clone());
        hotel
    }

    pub async fn insert_room(
        &self,
        hotel_id: HotelId,
        name: impl Into<String>,
        capacity: i32,
    ) -> Room {
        let mut tables = self.tables.write().await;
        let now = Timestamp::now();
        let room = Room {
            id: RoomId::new(tables.next_id()),
            name: name.into(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        tables.rooms.push(room.clone());
        room
    }

    /// Remove every ticket and ticket type.
    pub async fn clear_tickets(&self) {
        let mut tables = self.tables.write().await;
        tables.tickets.clear();
        tables.ticket_types.clear();
    }

    /// Remove every hotel and room.
    pub async fn clear_hotels(&self) {
        let mut tables = self.tables.write().await;
        tables.rooms.clear();
        tables.hotels.clear();
    }
}

#[async_trait]
impl TicketingReader for InMemoryHotelStore {
    async fn find_enrollment_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .iter()
            .find(|e| e.user_id == *user_id)
            .cloned())
    }

    async fn find_first_ticket_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .tickets
            .iter()
            .filter(|t| t.enrollment_id == *enrollment_id)
            .max_by_key(|t| (t.created_at, t.id))
            .cloned())
    }

    async fn find_ticket_type(
        &self,
        id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.ticket_types.iter().find(|t| t.id == *id).cloned())
    }
}

#[async_trait]
impl HotelReader for InMemoryHotelStore {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        let tables = self.tables.read().await;
        let mut hotels = tables.hotels.clone();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let tables = self.tables.read().await;
        let Some(hotel) = tables.hotels.iter().find(|h| h.id == *id).cloned() else {
            return Ok(None);
        };
        let mut rooms: Vec<Room> = tables
            .rooms
            .iter()
            .filter(|r| r.hotel_id == *id)
            .cloned()
            .collect();
        rooms.sort_by_key(|r| r.id);
        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }
}
