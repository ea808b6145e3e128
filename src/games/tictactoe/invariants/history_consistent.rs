//! History consistency invariant: one square per step, step within history.

use super::super::GameSession;
use super::Invariant;

/// Invariant: history is a line of single-square steps.
///
/// Entry 0 is the empty board, each later entry differs from its
/// predecessor in exactly one square, and the current step names an
/// existing entry.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let entries = session.history().entries();

        let Some(first) = entries.first() else {
            return false;
        };
        if first.squares().occupied() != 0 {
            return false;
        }

        let single_steps = entries
            .windows(2)
            .all(|pair| pair[1].squares().changed_positions(pair[0].squares()).len() == 1);

        single_steps && session.current_step() < entries.len()
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark and the current step exists"
    }
}
