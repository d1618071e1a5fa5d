//! Mortgage calculator CLI entry point.

use anyhow::Context;
use clap::Parser;

use mortgage_calculator::cli::{Cli, Commands};
use mortgage_calculator::infrastructure::logging::init_logging;
use mortgage_calculator::LoggingConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => mortgage_calculator::cli::commands::serve::execute(args).await,
        Commands::Calculate(args) => {
            // One-shot runs only surface warnings; the server configures its own subscriber.
            init_logging(&LoggingConfig {
                level: "warn".to_string(),
                format: "pretty".to_string(),
            })
            .context("Failed to initialize logging")
            .and_then(|()| mortgage_calculator::cli::commands::calculate::execute(&args, cli.json))
        }
    };

    if let Err(err) = result {
        mortgage_calculator::cli::handle_error(err, cli.json);
    }
}
