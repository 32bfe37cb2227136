//! HTTP handlers for hotel endpoints.
//!
//! These handlers connect axum routes to the hotel query handlers and map
//! every `HotelAccessError` to a status code.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::hotel::{
    GetHotelHandler, GetHotelQuery, ListHotelsHandler, ListHotelsQuery,
};
use crate::domain::foundation::HotelId;
use crate::domain::hotel::HotelAccessError;
use crate::ports::{HotelReader, TicketingReader};

use super::dto::{ErrorResponse, HotelDetailResponse, HotelResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the hotel routes.
#[derive(Clone)]
pub struct HotelAppState {
    pub ticketing_reader: Arc<dyn TicketingReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelAppState {
    pub fn new(
        ticketing_reader: Arc<dyn TicketingReader>,
        hotel_reader: Arc<dyn HotelReader>,
    ) -> Self {
        Self {
            ticketing_reader,
            hotel_reader,
        }
    }

    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(self.ticketing_reader.clone(), self.hotel_reader.clone())
    }

    pub fn get_hotel_handler(&self) -> GetHotelHandler {
        GetHotelHandler::new(self.ticketing_reader.clone(), self.hotel_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List hotels for the authenticated ticket holder
pub async fn list_hotels(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, HotelApiError> {
    let query = ListHotelsQuery { user_id: user.id };

    let hotels = state.list_hotels_handler().handle(query).await?;

    let response: Vec<HotelResponse> = hotels.iter().map(HotelResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

/// GET /hotels/:hotelId - One hotel with its rooms
///
/// A segment that is not an integer cannot name any hotel; it still goes
/// through the eligibility checks and then resolves to `HOTEL_NOT_FOUND`.
pub async fn get_hotel(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, HotelApiError> {
    let query = GetHotelQuery {
        user_id: user.id,
        hotel_id: hotel_id.parse::<HotelId>().ok(),
    };

    let hotel = state.get_hotel_handler().handle(query).await?;

    Ok((StatusCode::OK, Json(HotelDetailResponse::from(&hotel))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts hotel access errors to HTTP responses.
#[derive(Debug)]
pub struct HotelApiError(pub HotelAccessError);

impl From<HotelAccessError> for HotelApiError {
    fn from(err: HotelAccessError) -> Self {
        HotelApiError(err)
    }
}

impl HotelApiError {
    /// 404 and 402 follow the domain classification; anything else is 400.
    pub fn status(&self) -> StatusCode {
        if self.0.is_payment_required() {
            StatusCode::PAYMENT_REQUIRED
        } else if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for HotelApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match &self.0 {
            HotelAccessError::Unexpected(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Unclassified hotel failure");
            }
            err => {
                tracing::debug!(status = status.as_u16(), code = err.code(), "Hotel access refused");
            }
        }

        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}
