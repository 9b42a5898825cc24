//! API routes module

pub mod health;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(health::liveness))
        .nest("/products", products::router(state))
}
