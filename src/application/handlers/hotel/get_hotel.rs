//! GetHotelHandler - Query handler for a single hotel with rooms.

use std::sync::Arc;

use crate::domain::foundation::{HotelId, UserId};
use crate::domain::hotel::{HotelAccessError, HotelWithRooms};
use crate::ports::{HotelReader, TicketingReader};

use super::{store_failure, HotelEligibility};

/// Query for one hotel.
///
/// `hotel_id` is `None` when the caller supplied an identifier that is not
/// a number; such a request still runs the eligibility chain and then
/// resolves to `HotelNotFound`.
#[derive(Debug, Clone)]
pub struct GetHotelQuery {
    pub user_id: UserId,
    pub hotel_id: Option<HotelId>,
}

/// Handler for fetching a hotel and its rooms.
pub struct GetHotelHandler {
    eligibility: HotelEligibility,
    hotels: Arc<dyn HotelReader>,
}

impl GetHotelHandler {
    pub fn new(ticketing: Arc<dyn TicketingReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            eligibility: HotelEligibility::new(ticketing),
            hotels,
        }
    }

    pub async fn handle(&self, query: GetHotelQuery) -> Result<HotelWithRooms, HotelAccessError> {
        self.eligibility.ensure_eligible(&query.user_id).await?;

        let Some(hotel_id) = query.hotel_id else {
            return Err(HotelAccessError::HotelNotFound);
        };

        let hotel = self
            .hotels
            .find_hotel_with_rooms(&hotel_id)
            .await
            .map_err(store_failure)?
            .ok_or(HotelAccessError::HotelNotFound)?;

        tracing::debug!(
            user_id = %query.user_id,
            hotel_id = %hotel_id,
            rooms = hotel.rooms.len(),
            "Fetched hotel"
        );
        Ok(hotel)
    }
}
