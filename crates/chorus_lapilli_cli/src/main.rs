//! Chorus Lapilli - terminal front end
//!
//! Reads commands from stdin, renders the board to stdout and logs to stderr.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod session;

use anyhow::{Context, Result};
use chorus_lapilli::{EngineConfig, GameEngine};
use clap::Parser;
use cli::Cli;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    info!(selection = %config.selection(), "Starting game");

    let mut engine = GameEngine::with_config(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut engine, stdin.lock(), stdout.lock())
}

/// Builds the engine config from the optional file and command-line overrides.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    Ok(match cli.selection {
        Some(selection) => config.with_selection(selection),
        None => config,
    })
}
