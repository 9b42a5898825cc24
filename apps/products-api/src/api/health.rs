//! Liveness and readiness endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "API is running";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    #[schema(example = "API is running")]
    pub msg: String,
}

/// Liveness probe, answers regardless of database state
#[utoipa::path(
    get,
    path = "/api",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = StatusMessage)
    )
)]
pub async fn liveness() -> Json<StatusMessage> {
    Json(StatusMessage {
        msg: LIVENESS_MESSAGE.to_string(),
    })
}

/// Readiness probe: 200 while `SELECT 1` succeeds, 503 otherwise
pub async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            match &state.db {
                Some(db) => check_health(db).await.map_err(|e| e.to_string()),
                None => Err("no database connection".to_string()),
            }
        }),
    )];

    run_health_checks(checks).await
}

/// `/ready`, outside the `/api` prefix
pub fn ready_router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
