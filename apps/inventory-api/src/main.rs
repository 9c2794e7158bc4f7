use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::InMemoryItemStore;
use tracing::info;

mod app;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // color-eyre goes first so every later failure gets the colored report
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Items live for the lifetime of the process
    let store = InMemoryItemStore::new();
    let router = app::build(&config, store)?;

    info!(
        app = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "Starting inventory API"
    );

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
