use axum_helpers::server::{
    CleanupCoordinator, close_database, create_production_app, health_router,
};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
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

    // A .env file may fill in variables the environment does not set
    let env_file = core_config::load_dotenv()?;

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing (stdout plus the optional log file)
    init_tracing(&config.environment, &config.logging);

    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }

    info!("Connecting to SQLite at {}", config.database.url());

    // Connect to SQLite with retry
    let db =
        database::sqlite::connect_from_config_with_retry(config.database.clone(), None).await?;

    // Create the items table if this is a fresh database
    domain_items::schema::create_tables(&db).await?;

    // Initialize the application state
    let state = AppState { config, db };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!("Starting Items API with production-ready shutdown (30s timeout)");

    let db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            let mut cleanup = CleanupCoordinator::new();
            cleanup.add_task("sqlite", async move { close_database(db, "sqlite").await });
            cleanup.run().await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
