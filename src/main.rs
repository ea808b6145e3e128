//! Strictly Timetravel - Unified CLI
//!
//! Plays in the terminal by default; `replay` prints the outcome of a
//! move list without touching the terminal state.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timetravel::{
    Cli, Command, Settings, init_file_logging, parse_cells, render_text, replay, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())
        .context("Failed to load settings")?
        .with_overrides(cli.log_file.clone(), cli.log_filter.clone());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(settings.log())?;
            run_tui(&settings)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            // Replay output owns stdout; logs go to stderr and stay quiet by default.
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            run_replay(&moves, jump, descending, json)
        }
    }
}

/// Replays `moves` and prints the final state.
#[instrument]
fn run_replay(moves: &[String], jump: Option<usize>, descending: bool, json: bool) -> Result<()> {
    let cells = parse_cells(moves)?;
    info!(count = cells.len(), "Replaying moves");

    let session = replay(&cells, jump, descending)?;

    if json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", snapshot);
    } else {
        print!("{}", render_text(&session));
    }
    Ok(())
}
