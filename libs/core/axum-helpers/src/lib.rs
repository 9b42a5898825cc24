//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: `{ error }` / `{ errors }` envelopes and [`AppError`]
//! - **[`validation`]**: declarative field rules evaluated per route
//! - **[`extractors`]**: [`Validated`], the extractor that gates a handler on its rules
//! - **[`http`]**: CORS policy and security headers
//! - **[`server`]**: router assembly with API docs, readiness checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{cors::CorsConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new(), &CorsConfig::default())?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router,
    run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, FieldErrorsResponse};

pub use extractors::Validated;

pub use validation::{FieldError, FieldRule, Location, ValidationChain};
