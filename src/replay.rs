//! Headless replay of a move sequence.

use crate::games::tictactoe::{GameSession, Position};
use anyhow::{Context, Result, bail};
use tracing::{info, instrument};

/// Parses cell tokens into board indices.
///
/// Tokens may hold several cells separated by commas or whitespace. Each
/// cell is a number or a position label such as `center`. Numbers are not
/// range-checked here so the session can report them as out of bounds.
#[instrument]
pub fn parse_cells(tokens: &[String]) -> Result<Vec<usize>> {
    tokens
        .iter()
        .flat_map(|token| token.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|cell| !cell.is_empty())
        .map(|cell| -> Result<usize> {
            if let Ok(index) = cell.parse::<usize>() {
                return Ok(index);
            }
            match Position::from_label_or_number(cell) {
                Some(position) => Ok(position.to_index()),
                None => bail!("Unrecognized cell '{}'", cell),
            }
        })
        .collect()
}

/// Plays `cells` on a fresh session, then applies the jump and sort order.
///
/// Unlike the interactive front end, an illegal move is an error here.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>, descending: bool) -> Result<GameSession> {
    let mut session = GameSession::new();

    for (ply, &cell) in cells.iter().enumerate() {
        session
            .try_play_move(cell)
            .with_context(|| format!("Move #{} (cell {}) rejected", ply + 1, cell))?;
    }

    if let Some(step) = jump {
        session
            .try_jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    if descending {
        session.toggle_move_order();
    }

    info!(steps = session.history().len(), "Replay finished");
    Ok(session)
}

/// Plain-text report: board, status line, and move list.
pub fn render_text(session: &GameSession) -> String {
    let mut out = session.current_board().display();
    out.push_str("\n\n");
    out.push_str(&session.status_text());
    out.push('\n');
    if let Some(result) = session.winner() {
        let cells: Vec<String> = result.indices().iter().map(ToString::to_string).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
    }
    out.push('\n');
    for label in session.move_labels() {
        let marker = if label.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, label));
    }
    out
}
