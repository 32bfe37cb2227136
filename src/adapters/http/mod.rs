//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the public surface:
//!
//! - `GET /health` - liveness check, no authentication
//! - `GET /hotels`, `GET /hotels/:hotelId` - behind [`middleware::auth_middleware`]
//!
//! wrapped in request tracing, a request timeout and CORS.

pub mod health;
pub mod hotel;
pub mod middleware;

pub use hotel::{hotel_router, HotelApiError, HotelAppState};

use axum::routing::get;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::config::ServerConfig;

use self::health::health_check;
use self::middleware::{auth_middleware, AuthState};

/// Builds the complete application router.
pub fn app_router(hotels: HotelAppState, validator: AuthState, server: &ServerConfig) -> Router {
    let protected = hotel_router()
        .with_state(hotels)
        .layer(axum::middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
