//! Storage Telemetry Dashboard - Main Entry Point

use api::config::Config;
use storage::Repository;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    api::init_logging();

    info!("=== Storage Telemetry v{} ===", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let repository = Repository::connect(&config.database_url).await?;

    api::run_server(&config.bind_address, repository).await?;

    Ok(())
}
