//! ListHotelsHandler - Query handler for the hotel list.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::hotel::{Hotel, HotelAccessError};
use crate::ports::{HotelReader, TicketingReader};

use super::{store_failure, HotelEligibility};

/// Query for every hotel visible to a user.
#[derive(Debug, Clone)]
pub struct ListHotelsQuery {
    pub user_id: UserId,
}

/// Handler for listing hotels.
///
/// Runs the eligibility chain, then lists hotels. An empty store is a
/// failure (`NoHotels`), not an empty success.
pub struct ListHotelsHandler {
    eligibility: HotelEligibility,
    hotels: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
    pub fn new(ticketing: Arc<dyn TicketingReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            eligibility: HotelEligibility::new(ticketing),
            hotels,
        }
    }

    pub async fn handle(&self, query: ListHotelsQuery) -> Result<Vec<Hotel>, HotelAccessError> {
        self.eligibility.ensure_eligible(&query.user_id).await?;

        let hotels = self.hotels.list_hotels().await.map_err(store_failure)?;
        if hotels.is_empty() {
            return Err(HotelAccessError::NoHotels);
        }

        tracing::debug!(user_id = %query.user_id, count = hotels.len(), "Listed hotels");
        Ok(hotels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::hotel::testing::{Call, MockStore, USER};
    use crate::domain::foundation::HotelId;
    use crate::domain::ticketing::TicketStatus;

    fn handler(store: Arc<MockStore>) -> ListHotelsHandler {
        ListHotelsHandler::new(store.clone(), store)
    }

    fn query() -> ListHotelsQuery {
        ListHotelsQuery { user_id: USER }
    }

    #[tokio::test]
    async fn returns_every_hotel_for_eligible_user() {
        let store = Arc::new(MockStore::eligible().with_hotels(2));

        let hotels = handler(store).handle(query()).await.unwrap();

        let ids: Vec<HotelId> = hotels.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![HotelId::new(1), HotelId::new(2)]);
        assert_eq!(hotels[0].name, "hotel 1");
    }

    #[tokio::test]
    async fn fails_with_no_hotels_when_store_is_empty() {
        let store = Arc::new(MockStore::eligible());

        let result = handler(store).handle(query()).await;

        assert_eq!(result.unwrap_err(), HotelAccessError::NoHotels);
    }

    #[tokio::test]
    async fn eligibility_failure_skips_hotel_listing() {
        let store = Arc::new(
            MockStore::new()
                .with_enrollment()
                .with_ticket(TicketStatus::Reserved, false, true)
                .with_hotels(2),
        );

        let result = handler(store.clone()).handle(query()).await;

        assert_eq!(result.unwrap_err(), HotelAccessError::TicketNotPaid);
        assert!(!store.calls().contains(&Call::ListHotels));
    }

    #[tokio::test]
    async fn propagates_no_enrollment_verbatim() {
        let store = Arc::new(MockStore::new().with_hotels(1));

        let result = handler(store).handle(query()).await;

        assert_eq!(result.unwrap_err(), HotelAccessError::NoEnrollment);
    }

    #[tokio::test]
    async fn hotel_store_failure_is_unexpected() {
        let store = Arc::new(MockStore::eligible().with_hotels(1).failing_hotels());

        let result = handler(store).handle(query()).await;

        assert!(matches!(result, Err(HotelAccessError::Unexpected(_))));
    }
}
