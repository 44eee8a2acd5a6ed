//! Server infrastructure: router assembly, root/health endpoints and
//! graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router, with_middleware};
//!
//! let router = create_router::<ApiDoc>(api_routes)
//!     .merge(health_router(app_info!(), checks));
//! create_production_app(with_middleware(router), &server_config, cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, with_middleware};
pub use health::{HealthCheck, HealthCheckFuture, ServiceInfo, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
