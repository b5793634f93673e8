//! Command-line interface for chorus_lapilli.

use chorus_lapilli::SelectionPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Chorus Lapilli - tic-tac-toe with sliding pieces
#[derive(Parser, Debug)]
#[command(name = "lapilli")]
#[command(about = "Play Chorus Lapilli in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Selection policy for the movement phase (permissive or locked).
    /// Overrides the config file.
    #[arg(long)]
    pub selection: Option<SelectionPolicy>,
}
