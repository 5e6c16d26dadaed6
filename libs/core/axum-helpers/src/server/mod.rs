//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation and common middleware
//! - Health and readiness helpers
//! - Graceful shutdown coordination and connection cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.cors_origins)?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, config.server.shutdown_timeout, cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{
    NormalizedRouter, create_production_app, create_router, normalize_trailing_slash,
};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, close_postgres};
