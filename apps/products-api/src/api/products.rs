//! Products API routes

use axum::Router;
use domain_products::{
    PgProductRepository, ProductService, UnavailableProductRepository, handlers,
};

use crate::state::AppState;

/// Products router backed by Postgres, or by a store that fails every call
/// when there is no connection
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(ProductService::new(PgProductRepository::new(db.clone()))),
        None => handlers::router(ProductService::new(UnavailableProductRepository)),
    }
}
