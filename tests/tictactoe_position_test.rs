//! Tests for tic-tac-toe position enum.

use strictly_timetravel::{Coordinate, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_coordinates_are_one_based() {
    assert_eq!(Position::TopLeft.coordinate(), Coordinate { row: 1, col: 1 });
    assert_eq!(Position::TopRight.coordinate(), Coordinate { row: 1, col: 3 });
    assert_eq!(Position::BottomCenter.coordinate(), Coordinate { row: 3, col: 2 });
}
