//! Game phase derived from a board snapshot.
//!
//! The phase is never stored. It is recomputed from the current board
//! every time it is read, so it cannot drift out of sync with history.

use super::rules::{WinResult, calculate_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of the game on a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be played.
    InProgress,
    /// A line was completed.
    Won(WinResult),
    /// The board filled up with no completed line.
    Drawn,
}

impl GameStatus {
    /// Derives the phase of `board`.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(result) = calculate_winner(board) {
            GameStatus::Won(result)
        } else if is_full(board) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the winning line if there is one.
    pub fn winner(&self) -> Option<WinResult> {
        match self {
            GameStatus::Won(result) => Some(*result),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Drawn)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Status line shown to the players.
    pub fn describe(&self, next_player: Player) -> String {
        match self {
            GameStatus::Won(result) => format!("Winner: {}", result.player),
            GameStatus::Drawn => "The Game is Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", next_player),
        }
    }
}
