//! Implementation of the `mortgage-calculator serve` command.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::adapters::cache::InMemoryLoanCache;
use crate::adapters::http::MortgageHttpServer;
use crate::domain::ports::SystemClock;
use crate::infrastructure::config::{ConfigLoader, CONFIG_FILE_NAME};
use crate::infrastructure::logging::init_logging;
use crate::services::MortgageService;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = ConfigLoader::load_from_file(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    ConfigLoader::validate(&config)?;

    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!(config = %args.config.display(), "Configuration loaded");

    let cache = Arc::new(InMemoryLoanCache::new());
    let service = MortgageService::new(cache, Arc::new(SystemClock));

    MortgageHttpServer::new(service, config.server)
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|err| anyhow!("Server startup error: {err}"))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
