//! Command-line interface for rewind_tictactoe.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Terminal tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Milliseconds before a finished game resets itself (0 disables)
    #[arg(long, global = true)]
    pub auto_reset_ms: Option<u64>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Available modes
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a sequence of cell indices and print the final state
    Replay {
        /// Cell indices (0-8), X first
        cells: Vec<usize>,
    },
}
