use mongodb::{Client, Database, bson::doc};
use std::time::{Duration, Instant};

/// Outcome of a liveness probe against MongoDB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    /// `"connected"` or `"disconnected"`, as reported by the health endpoint.
    pub fn label(&self) -> &'static str {
        if self.healthy { "connected" } else { "disconnected" }
    }
}

/// Sends `{ ping: 1 }` to `db` and returns the round-trip time.
pub async fn ping(db: &Database) -> Result<Duration, mongodb::error::Error> {
    let start = Instant::now();
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(start.elapsed())
}

/// Pings the `admin` database of `client`; never fails.
pub async fn check_health(client: &Client) -> HealthStatus {
    match ping(&client.database("admin")).await {
        Ok(elapsed) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: elapsed.as_millis() as u64,
        },
        Err(e) => {
            tracing::warn!(error = %e, "MongoDB health check failed");
            HealthStatus {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_label() {
        let up = HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: 3,
        };
        let down = HealthStatus {
            healthy: false,
            message: Some("server selection timeout".into()),
            response_time_ms: 0,
        };
        assert_eq!(up.label(), "connected");
        assert_eq!(down.label(), "disconnected");
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB (MONGODB_URL)
    async fn test_check_health() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(url).await.unwrap();
        assert!(check_health(&client).await.healthy);
    }
}
