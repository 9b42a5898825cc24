//! Startup sequence: database connection, migrations and router assembly

use axum::Router;
use axum_helpers::create_router;
use database::postgres::{self, DatabaseConnection, DbErr, PostgresConfig};
use migration::Migrator;
use std::future::Future;
use tracing::{error, info, warn};

use crate::api::{self, health};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Name recorded with migration runs
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Await `connect`, logging a failure instead of returning it
pub async fn connect_or_degrade<F, Fut>(connect: F) -> Option<DatabaseConnection>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<DatabaseConnection, DbErr>>,
{
    match connect().await {
        Ok(db) => Some(db),
        Err(e) => {
            error!(error = %e, "Failed to connect to the database");
            None
        }
    }
}

/// Connect (with retry) and apply pending migrations.
///
/// Returns `None` when there is no database configured or the connection
/// failed; a failed migration is logged and the connection is kept.
pub async fn connect_database(config: Option<PostgresConfig>) -> Option<DatabaseConnection> {
    let Some(config) = config else {
        warn!("DATABASE_URL is not set, product routes will fail until restart");
        return None;
    };

    let db = connect_or_degrade(|| postgres::connect_from_config_with_retry(config, None)).await?;

    if let Err(e) = postgres::run_migrations::<Migrator>(&db, APP_NAME).await {
        error!(error = %e, "Failed to apply database migrations");
    }

    Some(db)
}

/// Full application router: `/api` routes with docs and middleware, plus `/ready`
pub fn build_app(state: AppState) -> eyre::Result<Router> {
    let router = create_router::<ApiDoc>(api::routes(&state), &state.config.cors)?;
    info!(origins = ?state.config.cors.allowed_origins(), "CORS configured");

    Ok(router.merge(health::ready_router(state)))
}
