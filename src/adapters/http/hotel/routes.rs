//! Route configuration for hotel endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_hotel, list_hotels, HotelAppState};

/// Creates the hotel router.
///
/// Routes:
/// - `GET /hotels` - List hotels
/// - `GET /hotels/:hotel_id` - Hotel with rooms
pub fn hotel_router() -> Router<HotelAppState> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/:hotel_id", get(get_hotel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryHotelStore;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::domain::ticketing::TicketStatus;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(store: InMemoryHotelStore, user: Option<UserId>) -> Router {
        let state = HotelAppState::new(Arc::new(store.clone()), Arc::new(store));
        let router = hotel_router().with_state(state);
        match user {
            // Stand-in for auth_middleware.
            Some(id) => router.layer(axum::Extension(AuthenticatedUser::new(id))),
            None => router,
        }
    }

    async fn eligible_store() -> (InMemoryHotelStore, UserId) {
        let store = InMemoryHotelStore::new();
        let user = UserId::new(1);
        let enrollment = store.insert_enrollment(user).await;
        let ticket_type = store.insert_ticket_type("In person", false, true).await;
        store
            .insert_ticket(enrollment.id, ticket_type.id, TicketStatus::Paid)
            .await;
        (store, user)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn list_route_exists() {
        let (store, user) = eligible_store().await;
        store.insert_hotel("hotel 1", "https://example.com/1.png").await;

        let response = app(store, Some(user)).oneshot(get("/hotels")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn detail_route_exists() {
        let (store, user) = eligible_store().await;
        let hotel = store.insert_hotel("hotel 1", "https://example.com/1.png").await;

        let response = app(store, Some(user))
            .oneshot(get(&format!("/hotels/{}", hotel.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn routes_require_authenticated_user() {
        let (store, _) = eligible_store().await;

        let response = app(store, None).oneshot(get("/hotels")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let (store, user) = eligible_store().await;

        let response = app(store, Some(user))
            .oneshot(get("/hotels/1/rooms"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
