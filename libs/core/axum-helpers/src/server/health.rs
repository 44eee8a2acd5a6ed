use crate::envelope::ApiResponse;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use utoipa::ToSchema;

/// Payload of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

/// A boxed future for health checks with a string error
pub type HealthCheckFuture = Pin<Box<dyn Future<Output = Result<(), String>> + Send>>;

/// Named dependency probe run on every `GET /health`.
pub type HealthCheck = (&'static str, Arc<dyn Fn() -> HealthCheckFuture + Send + Sync>);

#[derive(Clone)]
struct HealthState {
    app_info: AppInfo,
    checks: Arc<Vec<HealthCheck>>,
}

/// Runs every probe concurrently.
///
/// Returns each probe's `"connected"`/`"disconnected"` label and whether all
/// of them passed.
pub async fn run_health_checks(checks: &[HealthCheck]) -> (BTreeMap<&'static str, &'static str>, bool) {
    let results = join_all(checks.iter().map(|(_, probe)| probe())).await;

    let mut statuses = BTreeMap::new();
    let mut all_healthy = true;
    for ((name, _), result) in checks.iter().zip(results) {
        match result {
            Ok(()) => {
                statuses.insert(*name, "connected");
            }
            Err(e) => {
                tracing::error!(check = name, error = %e, "Health check failed");
                statuses.insert(*name, "disconnected");
                all_healthy = false;
            }
        }
    }

    (statuses, all_healthy)
}

async fn root_handler(State(state): State<HealthState>) -> ApiResponse<ServiceInfo> {
    ApiResponse::ok(
        "API is running",
        ServiceInfo {
            service: state.app_info.name,
            version: state.app_info.version,
        },
    )
}

async fn health_handler(
    State(state): State<HealthState>,
) -> ApiResponse<BTreeMap<&'static str, &'static str>> {
    let (statuses, healthy) = run_health_checks(&state.checks).await;

    if healthy {
        ApiResponse::ok("System healthy", statuses)
    } else {
        ApiResponse::failure(StatusCode::SERVICE_UNAVAILABLE, "System unhealthy", statuses)
    }
}

/// `GET /` (service name and version) and `GET /health` (dependency probes).
///
/// `/health` answers 200 when every probe passes and 503 otherwise; with no
/// probes it always answers 200.
pub fn health_router(app_info: AppInfo, checks: Vec<HealthCheck>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(HealthState {
            app_info,
            checks: Arc::new(checks),
        })
}
