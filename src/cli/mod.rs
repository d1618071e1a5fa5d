//! Command-line interface.
//!
//! This module contains the clap command structures and the command
//! implementations built on top of them.

pub mod commands;
pub mod display;
pub mod output;

use clap::{Parser, Subcommand};

use commands::calculate::CalculateArgs;
use commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(name = "mortgage-calculator")]
#[command(about = "Mortgage aggregate calculator with an HTTP API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Calculate aggregates for a single loan request
    Calculate(CalculateArgs),
}

/// Report a command failure and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
