//! Key bindings and cursor movement.

use super::app::Focus;
use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play at the cursor.
    Play,
    /// Play directly at a square (digit shortcuts).
    PlayAt(Position),
    /// Switch focus between the board and the move list.
    SwitchFocus,
    /// Select the previous move-list entry.
    SelectPrevious,
    /// Select the next move-list entry.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Flip the move-list order.
    ToggleOrder,
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Decodes a key press in the context of the focused panel.
pub fn map_key(key: KeyCode, focus: Focus) -> Option<Action> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::SwitchFocus),
        (KeyCode::Char('s'), _) => Some(Action::ToggleOrder),
        (KeyCode::Char('r'), _) => Some(Action::Reset),
        (KeyCode::Char(c), _) if ('1'..='9').contains(&c) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlayAt),
        (KeyCode::Up, Focus::Moves) => Some(Action::SelectPrevious),
        (KeyCode::Down, Focus::Moves) => Some(Action::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => Some(Action::JumpToSelected),
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Some(Action::MoveCursor(key))
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::Play),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // Edges stay put
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_digits_play_directly() {
        assert_eq!(
            map_key(KeyCode::Char('1'), Focus::Board),
            Some(Action::PlayAt(Position::TopLeft))
        );
        assert_eq!(
            map_key(KeyCode::Char('9'), Focus::Moves),
            Some(Action::PlayAt(Position::BottomRight))
        );
        assert_eq!(map_key(KeyCode::Char('0'), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            map_key(KeyCode::Up, Focus::Board),
            Some(Action::MoveCursor(KeyCode::Up))
        );
        assert_eq!(map_key(KeyCode::Up, Focus::Moves), Some(Action::SelectPrevious));
        assert_eq!(map_key(KeyCode::Left, Focus::Moves), None);
        assert_eq!(map_key(KeyCode::Enter, Focus::Board), Some(Action::Play));
        assert_eq!(map_key(KeyCode::Enter, Focus::Moves), Some(Action::JumpToSelected));
    }
}
