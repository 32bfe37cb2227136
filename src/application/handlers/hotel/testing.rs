//! Shared mock store for hotel handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, EnrollmentId, ErrorCode, HotelId, RoomId, TicketId, TicketTypeId, Timestamp,
    UserId,
};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::domain::ticketing::{Enrollment, Ticket, TicketStatus, TicketType};
use crate::ports::{HotelReader, TicketingReader};

pub const USER: UserId = UserId::new(1);

/// Port method invoked on the mock, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Enrollment,
    Ticket,
    TicketType,
    ListHotels,
    FindHotel,
}

#[derive(Default)]
pub struct MockStore {
    enrollment: Option<Enrollment>,
    ticket: Option<Ticket>,
    ticket_type: Option<TicketType>,
    hotels: Vec<HotelWithRooms>,
    fail_ticketing: bool,
    fail_hotels: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrollment plus a paid, in-person, hotel-including ticket.
    pub fn eligible() -> Self {
        Self::new()
            .with_enrollment()
            .with_ticket(TicketStatus::Paid, false, true)
    }

    pub fn with_enrollment(mut self) -> Self {
        self.enrollment = Some(Enrollment {
            id: EnrollmentId::new(10),
            user_id: USER,
        });
        self
    }

    pub fn with_ticket(mut self, status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Self {
        self.ticket = Some(Ticket {
            id: TicketId::new(100),
            enrollment_id: EnrollmentId::new(10),
            ticket_type_id: TicketTypeId::new(1000),
            status,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        });
        self.ticket_type = Some(TicketType {
            id: TicketTypeId::new(1000),
            name: "test".to_string(),
            is_remote,
            includes_hotel,
        });
        self
    }

    pub fn without_ticket_type(mut self) -> Self {
        self.ticket_type = None;
        self
    }

    /// Adds `count` hotels; hotel `n` gets `n` rooms.
    pub fn with_hotels(mut self, count: i32) -> Self {
        for n in 1..=count {
            let hotel = Hotel {
                id: HotelId::new(n),
                name: format!("hotel {}", n),
                image: "https://example.com/hotel.jpg".to_string(),
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            };
            let rooms = (1..=n)
                .map(|r| Room {
                    id: RoomId::new(n * 100 + r),
                    name: format!("room {}", r),
                    capacity: r + 1,
                    hotel_id: hotel.id,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                })
                .collect();
            self.hotels.push(HotelWithRooms::new(hotel, rooms));
        }
        self
    }

    pub fn failing_ticketing(mut self) -> Self {
        self.fail_ticketing = true;
        self
    }

    pub fn failing_hotels(mut self) -> Self {
        self.fail_hotels = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn ticketing_result<T: Clone>(&self, value: &Option<T>) -> Result<Option<T>, DomainError> {
        if self.fail_ticketing {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
        }
        Ok(value.clone())
    }

    fn hotel_failure(&self) -> Result<(), DomainError> {
        if self.fail_hotels {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl TicketingReader for MockStore {
    async fn find_enrollment_by_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        self.record(Call::Enrollment);
        self.ticketing_result(&self.enrollment)
    }

    async fn find_first_ticket_by_enrollment(
        &self,
        _enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.record(Call::Ticket);
        self.ticketing_result(&self.ticket)
    }

    async fn find_ticket_type(
        &self,
        _id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        self.record(Call::TicketType);
        self.ticketing_result(&self.ticket_type)
    }
}

#[async_trait]
impl HotelReader for MockStore {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        self.record(Call::ListHotels);
        self.hotel_failure()?;
        Ok(self.hotels.iter().map(|h| h.hotel.clone()).collect())
    }

    async fn find_hotel_with_rooms(
        &self,
        id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        self.record(Call::FindHotel);
        self.hotel_failure()?;
        Ok(self.hotels.iter().find(|h| h.hotel.id == *id).cloned())
    }
}
