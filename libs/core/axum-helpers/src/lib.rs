//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`envelope`]**: `{ success, statusCode, message, data }` success wrapper
//! - **[`errors`]**: [`AppError`] and the matching error envelope
//! - **[`extractors`]**: [`ValidatedJson`]
//! - **[`middleware`]**: request timing and security headers
//! - **[`server`]**: router assembly, root/health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router, with_middleware};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!(), vec![]));
//! create_production_app(with_middleware(router), &ServerConfig::default(), async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

pub use envelope::ApiResponse;
pub use errors::{AppError, ErrorCode, ErrorContext, ErrorResponse};
pub use extractors::ValidatedJson;
pub use server::{
    HealthCheck, HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router,
    health_router, with_middleware,
};
