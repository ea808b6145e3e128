//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark added at step `n` belongs to X when `n` is odd and to O when
/// it is even, which is what lets the next player be derived from the
/// parity of the current step alone.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        (1..history.len()).all(|step| {
            let before = history.entries()[step - 1].squares();
            let after = history.entries()[step].squares();
            let expected = Player::for_step(step - 1);
            after
                .changed_positions(before)
                .iter()
                .all(|pos| after.get(*pos).player() == Some(expected))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;
    use crate::games::tictactoe::history::HistoryEntry;

    #[test]
    fn test_new_session_holds() {
        let session = GameSession::new();
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = GameSession::new();
        for cell in [0, 4, 2, 6, 8] {
            session.play_move(cell);
        }
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.next_player(), Player::O);
    }

    #[test]
    fn test_holds_after_jump() {
        let mut session = GameSession::new();
        for cell in [0, 4, 2] {
            session.play_move(cell);
        }
        session.jump_to(2);
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.next_player(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::new();
        session.play_move(0);
        let board = session
            .current_board()
            .with_mark(Position::Center, Player::X);
        session.history.push(HistoryEntry::new(board));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
