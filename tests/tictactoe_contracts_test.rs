//! Tests for session contracts and invariants through the public API.

use strictly_timetravel::{
    Contract, GameSession, InvariantSet, JumpContract, MoveError, PlayMoveContract, Position,
    SessionInvariants,
};

#[test]
fn test_play_preconditions() {
    let mut session = GameSession::new();
    assert!(PlayMoveContract::pre(&session, &Position::Center).is_ok());

    session.play_move(4);
    let result = PlayMoveContract::pre(&session, &Position::Center);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_play_postcondition_after_branch() {
    let mut session = GameSession::new();
    for cell in [0, 4, 8] {
        session.play_move(cell);
    }
    session.jump_to(1);

    let before = session.clone();
    session.play_move(2);
    assert!(PlayMoveContract::post(&before, &session).is_ok());
}

#[test]
fn test_jump_preconditions() {
    let mut session = GameSession::new();
    session.play_move(4);

    assert!(JumpContract::pre(&session, &1).is_ok());
    assert_eq!(
        JumpContract::pre(&session, &2),
        Err(MoveError::StepOutOfRange { step: 2, last: 1 })
    );
}

#[test]
fn test_invariants_hold_through_a_whole_game() {
    let mut session = GameSession::new();
    for cell in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        session.play_move(cell);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }
    for step in 0..session.history().len() {
        session.jump_to(step);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }
}
