//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./strictly_timetravel.toml if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file used by the terminal UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override the log filter used when RUST_LOG is unset
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay a sequence of moves and print the result
    Replay {
        /// Cells to play in order (0-8), separated by commas or spaces
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        moves: Vec<String>,

        /// Jump to this step after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the move list newest first
        #[arg(long)]
        descending: bool,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
