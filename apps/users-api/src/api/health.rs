//! Dependency checks reported by `GET /health`

use axum_helpers::{HealthCheck, HealthCheckFuture};
use database::mongodb::{Client, check_health};
use std::sync::Arc;
use std::time::Duration;

const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Pings MongoDB; reported as `database`.
pub fn database_check(client: Client) -> HealthCheck {
    let check: Arc<dyn Fn() -> HealthCheckFuture + Send + Sync> = Arc::new(move || {
        let client = client.clone();
        Box::pin(async move {
            let status = tokio::time::timeout(PING_TIMEOUT, check_health(&client))
                .await
                .map_err(|_| format!("ping timed out after {PING_TIMEOUT:?}"))?;

            tracing::debug!(
                response_time_ms = status.response_time_ms,
                status = status.label(),
                "MongoDB health check"
            );
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
            }
        })
    });

    ("database", check)
}
