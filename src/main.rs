//! Event Hotels server binary.
//!
//! Loads configuration from the environment, connects to PostgreSQL and
//! serves the hotel routes until Ctrl-C.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use event_hotels::adapters::http::middleware::AuthState;
use event_hotels::adapters::{
    app_router, HotelAppState, JwtSessionValidator, PostgresHotelReader, PostgresSessionReader,
    PostgresTicketingReader,
};
use event_hotels::config::{AppConfig, ConfigError, ServerConfig, ValidationError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_logger(&config.server)?;

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration rejected");
        return Err(e.into());
    }

    let db = &config.database;
    let pool = PgPoolOptions::new()
        .min_connections(db.min_connections)
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout())
        .idle_timeout(Some(db.idle_timeout()))
        .max_lifetime(Some(db.max_lifetime()))
        .connect(&db.url)
        .await?;

    let mut validator = JwtSessionValidator::new(&config.auth.jwt_secret);
    if config.auth.require_session {
        validator = validator.with_session_reader(Arc::new(PostgresSessionReader::new(pool.clone())));
    }
    let validator: AuthState = Arc::new(validator);

    let hotels = HotelAppState::new(
        Arc::new(PostgresTicketingReader::new(pool.clone())),
        Arc::new(PostgresHotelReader::new(pool)),
    );

    let app = app_router(hotels, validator, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        require_session = config.auth.require_session,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server terminated unexpectedly"))?;

    tracing::info!("Shut down");
    Ok(())
}

/// JSON lines in production, human-readable output elsewhere.
fn init_logger(server: &ServerConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let production = server.is_production();

    tracing_subscriber::registry()
        .with(filter)
        .with(production.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!production).then(|| tracing_subscriber::fmt::layer().with_target(true)))
        .try_init()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
