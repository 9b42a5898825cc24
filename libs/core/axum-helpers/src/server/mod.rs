//! Server infrastructure: router assembly with API documentation, readiness
//! checks, and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &cors_config)?;
//! create_production_app(router, &server_config, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
