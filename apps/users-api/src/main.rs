use axum_helpers::server::{create_production_app, create_router, health_router, with_middleware};
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // `.env` values fill in anything not already set
    load_dotenv();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(url = %config.mongodb.redacted_url(), "Connecting to MongoDB");

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize indexes
    api::users::init_indexes(&db).await?;

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes and OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api::routes(&state)).merge(health_router(
        state.config.app,
        vec![api::health::database_check(state.mongo_client.clone())],
    ));
    let app = with_middleware(router);

    let server_config = state.config.server.clone();
    info!(
        address = %server_config.address(),
        shutdown_timeout = ?server_config.shutdown_timeout,
        "Starting User Service API"
    );

    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing MongoDB connections");
        state.mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User Service API shutdown complete");
    Ok(())
}
