//! Service entry point.

use anyhow::{Context, Result};
use shortr::config::{self, Config};
use shortr::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber from the loaded configuration.
fn init_tracing(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_new(&config.log_level).context("Invalid RUST_LOG filter directive")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
