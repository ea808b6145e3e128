//! Monotonic board invariant: squares never change once set.

use super::super::{GameSession, Position, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square holds a mark in some history entry, every later entry
/// holds the same mark there.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].squares(), pair[1].squares());
            Position::ALL
                .iter()
                .all(|pos| before.get(*pos) == Square::Empty || before.get(*pos) == after.get(*pos))
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;
    use crate::games::tictactoe::history::HistoryEntry;

    #[test]
    fn test_new_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut session = GameSession::new();
        for cell in [0, 4, 2, 6] {
            session.play_move(cell);
        }
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = GameSession::new();
        session.play_move(4);
        let overwritten = session
            .current_board()
            .with_mark(Position::Center, Player::O);
        session.history.push(HistoryEntry::new(overwritten));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut session = GameSession::new();
        session.play_move(4);
        let mut cleared = session.current_board().clone();
        cleared.set(Position::Center, Square::Empty);
        session.history.push(HistoryEntry::new(cleared));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
