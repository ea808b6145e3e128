//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::session::GameSession;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game on the current board is still in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the current board is won or drawn.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index names a square on the board.
pub struct InBounds;

impl InBounds {
    /// Resolves `index` to its position, failing past the last square.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if `position` is already marked on the current board.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &GameSession) -> Result<(), MoveError> {
        if session.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        SquareIsEmpty::check(position, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a mark.
///
/// Preconditions:
/// - Game not over
/// - Square empty
///
/// Postconditions:
/// - History ends one entry after the branch point, at the current step
/// - Session invariants hold
pub struct PlayMoveContract;

impl Contract<GameSession, Position> for PlayMoveContract {
    fn pre(session: &GameSession, position: &Position) -> Result<(), MoveError> {
        LegalMove::check(*position, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let expected = before.current_step() + 1;
        if after.current_step() != expected || after.history().last_step() != expected {
            warn!(
                expected,
                current_step = after.current_step(),
                last_step = after.history().last_step(),
                "Branch postcondition violated"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must land one step after the branch point"
                    .to_string(),
            ));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for time travel.
///
/// Precondition: the step exists in history.
pub struct JumpContract;

impl Contract<GameSession, usize> for JumpContract {
    fn pre(session: &GameSession, step: &usize) -> Result<(), MoveError> {
        let last = session.history().last_step();
        if *step > last {
            Err(MoveError::StepOutOfRange { step: *step, last })
        } else {
            Ok(())
        }
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        if before.history() != after.history() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: jumping must not alter history".to_string(),
            ));
        }
        check_invariants(after)
    }
}

fn check_invariants(session: &GameSession) -> Result<(), MoveError> {
    SessionInvariants::check_all(session).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
