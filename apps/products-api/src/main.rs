//! Products API - REST server for the financial product catalog

use axum_helpers::server::create_production_app;
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
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let server = config.server.clone();
    let state = AppState::new(config);

    info!(
        seeded = state.config.seed_products,
        base_path = %server.base_path,
        "Initialized in-memory product catalog"
    );

    let app = api::app(state)?;

    info!("Starting {} on port {}", env!("CARGO_PKG_NAME"), server.port);

    create_production_app(app, &server, Duration::from_secs(30), async {
        info!("Shutting down: in-memory catalog discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
