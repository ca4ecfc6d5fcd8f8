use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

use catalog_api::api;
use catalog_api::config::Config;
use catalog_api::openapi::ApiDoc;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!("{} v{} starting", config.app.name, config.app.version);

    // Items and health routes; the in-memory repository is constructed here,
    // once, and lives for the whole process
    let api_routes = api::routes();

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<ApiDoc>(api_routes).await?;

    // Server with graceful shutdown; no connections to clean up, the
    // in-memory catalog simply drops with the process
    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
