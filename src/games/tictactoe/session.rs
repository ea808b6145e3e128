//! Time-travelling game session.
//!
//! The session owns the full history and the step currently shown. Every
//! derived value (board, next player, winner, draw, move list) is computed
//! on read from those two fields plus the sort order.

use super::action::{Move, MoveError};
use super::contracts::{Contract, InBounds, JumpContract, PlayMoveContract};
use super::history::{History, HistoryEntry};
use super::labels::{MoveLabel, SortOrder, move_labels};
use super::phases::GameStatus;
use super::rules::WinResult;
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game with move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) history: History,
    pub(super) current_step: usize,
    pub(super) sort_order: SortOrder,
}

impl GameSession {
    /// Creates a session showing the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            sort_order: SortOrder::Ascending,
        }
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step shown on the board.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// True when the move list is shown newest first.
    pub fn sort_descending(&self) -> bool {
        self.sort_order == SortOrder::Descending
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history.entries()[self.current_step].squares()
    }

    /// Player due to move, derived from the parity of the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Phase of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board())
    }

    /// Winning line on the current board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        self.status().winner()
    }

    /// True when the current board is full without a winner.
    pub fn is_draw(&self) -> bool {
        self.status().is_draw()
    }

    /// True when the current board is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// Status line for the current board.
    pub fn status_text(&self) -> String {
        self.status().describe(self.next_player())
    }

    /// Move list in presentation order.
    pub fn move_labels(&self) -> Vec<MoveLabel> {
        move_labels(&self.history, self.current_step, self.sort_order)
    }

    /// Plays the next player's mark at `index` (0-8).
    ///
    /// History after the current step is discarded before the new board is
    /// appended. The branch is built on a copy and only committed once its
    /// postcondition holds, so any `Err` leaves the session untouched.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn try_play_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = InBounds::check(index)?;
        PlayMoveContract::pre(self, &position)?;

        let action = Move::new(self.next_player(), position);
        let board = self.current_board().with_mark(position, action.player);
        let mut next = self.clone();
        next.history.branch_at(next.current_step);
        next.history.push(HistoryEntry::new(board));
        next.current_step = next.history.last_step();

        #[cfg(debug_assertions)]
        PlayMoveContract::post(self, &next)?;

        *self = next;
        info!(%action, step = self.current_step, "Move played");
        Ok(action)
    }

    /// Plays at `index`, ignoring illegal moves.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, index: usize) {
        if let Err(error) = self.try_play_move(index) {
            debug!(%error, "Ignoring move");
        }
    }

    /// Shows the board at `step` without touching history.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        JumpContract::pre(self, &step)?;

        let mut next = self.clone();
        next.current_step = step;

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        *self = next;
        info!(next_player = %self.next_player(), "Jumped to step");
        Ok(())
    }

    /// Jumps to `step`, ignoring steps past the end of history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if let Err(error) = self.try_jump_to(step) {
            debug!(%error, "Ignoring jump");
        }
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(order = self.sort_order.label(), "Move order toggled");
    }

    /// Starts over from the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Session reset");
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.current_board().clone(),
            current_step: self.current_step,
            next_player: self.next_player(),
            status: self.status(),
            status_text: self.status_text(),
            sort_order: self.sort_order,
            moves: self
                .move_labels()
                .into_iter()
                .map(|label| MoveEntry {
                    text: label.to_string(),
                    label,
                })
                .collect(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of a session, for printing and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board at the current step.
    pub board: Board,
    /// Step shown on the board.
    pub current_step: usize,
    /// Player due to move.
    pub next_player: Player,
    /// Derived phase.
    pub status: GameStatus,
    /// Status line.
    pub status_text: String,
    /// Move-list order.
    pub sort_order: SortOrder,
    /// Move list in presentation order.
    pub moves: Vec<MoveEntry>,
}

/// A move-list label with its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Structured label.
    #[serde(flatten)]
    pub label: MoveLabel,
    /// Label as shown in the move list.
    pub text: String,
}
