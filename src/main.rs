use std::path::PathBuf;

use anyhow::Result;
use ecoscan::{EcoScanConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // optional config file path as the only argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = EcoScanConfig::load_from_path(config_path)?;

    logging::init(&config.logging)?;

    tracing::info!("Starting EcoScan {}", ecoscan::VERSION);
    tracing::info!("  Bind address: {}", config.bind_address());
    tracing::info!("  Static files: {}", config.server.static_dir);
    tracing::info!("  Location cache: {} entries", config.cache.max_entries);

    web::run(&config).await
}
