//! Application state management

use database::postgres::DatabaseConnection;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Connection pool, absent when the database could not be reached at startup
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(config: Config, db: Option<DatabaseConnection>) -> Self {
        Self { config, db }
    }
}
