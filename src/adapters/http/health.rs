//! Liveness check.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// GET /health - returns 200 OK while the process is serving requests.
///
/// Unauthenticated and never touches the database.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
