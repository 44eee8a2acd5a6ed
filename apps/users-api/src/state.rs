//! Application state management.

use mongodb::{Client, Database};

/// Shared application state, built once in `main`.
///
/// `Client` and `Database` are handles onto one shared connection pool, so
/// cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, shut down during graceful shutdown
    pub mongo_client: Client,
    /// Database holding the `users` collection
    pub db: Database,
}
