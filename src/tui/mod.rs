//! Terminal UI for Strictly Timetravel

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, map_key, move_cursor};
pub use ui::draw;

use crate::config::{LogSettings, Settings};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Routes tracing output to the configured log file.
///
/// The terminal belongs to the game while the UI runs, so nothing is
/// written to stdout or stderr.
pub fn init_file_logging(settings: &LogSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())
        .with_context(|| format!("Failed to create log file {}", settings.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Run the TUI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    let res = run_app(&mut terminal, App::new(), settings.ui().poll_interval());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well as presses.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match map_key(key.code, app.focus()) {
                    Some(action) => app.apply(action),
                    None => debug!(code = ?key.code, "Unbound key"),
                }
            }
        }

        if app.should_quit() {
            info!(steps = app.session().history().len(), "User quit");
            return Ok(());
        }
    }
}
