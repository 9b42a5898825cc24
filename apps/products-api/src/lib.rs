//! Products API - REST server over the products table

pub mod api;
pub mod config;
pub mod openapi;
pub mod startup;
pub mod state;

use axum_helpers::create_production_app;
use core_config::tracing::init_tracing;
use database::postgres;
use std::time::Duration;
use tracing::{info, warn};

use config::Config;
use state::AppState;

/// Grace period for cleanup once a shutdown signal arrives
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Load configuration, connect, and serve until SIGINT/SIGTERM
pub async fn run() -> eyre::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = startup::connect_database(config.database.clone()).await;
    let state = AppState::new(config.clone(), db.clone());
    let app = startup::build_app(state)?;

    info!("Starting Products API on port {}", config.server.port);

    create_production_app(app, &config.server, SHUTDOWN_TIMEOUT, async move {
        if let Some(db) = db {
            info!("Shutting down: closing PostgreSQL connections");
            if let Err(e) = postgres::close(db).await {
                warn!(error = %e, "Failed to close PostgreSQL connections");
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
