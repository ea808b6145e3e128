//! Linear move history with destructive branching.
//!
//! Each entry is the board as it stood after one ply; entry 0 is the empty
//! board. Playing from an earlier step throws away every later entry, so
//! the history is always a single line, never a tree.

use super::action::Move;
use super::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board snapshot taken after a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    squares: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(squares: Board) -> Self {
        Self { squares }
    }

    /// The board at this step.
    pub fn squares(&self) -> &Board {
        &self.squares
    }
}

/// Ordered board snapshots, one per ply plus the initial empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of entries, including the initial board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// All entries in play order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn branch_at(&mut self, step: usize) {
        if step + 1 < self.entries.len() {
            debug!(discarded = self.entries.len() - step - 1, "Discarding future history");
            self.entries.truncate(step + 1);
        }
    }

    /// Appends a snapshot as the newest entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Recovers the ply that produced entry `step` from its predecessor.
    ///
    /// Returns `None` for step 0, for steps past the end, and for entries
    /// that do not differ from their predecessor in exactly one square.
    #[instrument(skip(self))]
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.entries.get(step - 1)?.squares();
        let after = self.entries.get(step)?.squares();
        match after.changed_positions(before).as_slice() {
            [position] => {
                let player = after.get(*position).player()?;
                Some(Move::new(player, *position))
            }
            _ => None,
        }
    }

    /// Builds a history by marking `positions` in order from the empty board.
    ///
    /// Marks alternate starting from X. No rules are checked, so this is
    /// only meant for fixtures.
    #[cfg(test)]
    pub(crate) fn from_positions(positions: &[super::Position]) -> Self {
        let mut history = Self::new();
        for (ply, position) in positions.iter().enumerate() {
            let board = history.entries[ply]
                .squares()
                .with_mark(*position, super::Player::for_step(ply));
            history.push(HistoryEntry::new(board));
        }
        history
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
