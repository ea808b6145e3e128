//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::games::tictactoe::{GameSession, Position};
use tracing::{debug, instrument};

/// Panel receiving arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the session; every change to it goes through one of the session's
/// four operations.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in presentation order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a decoded user intent.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::Play => {
                self.session.play_move(self.cursor.to_index());
                self.sync_selection();
            }
            Action::PlayAt(position) => {
                self.cursor = position;
                self.session.play_move(position.to_index());
                self.sync_selection();
            }
            Action::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            Action::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::SelectNext => {
                let last = self.session.history().last_step();
                self.selected = (self.selected + 1).min(last);
            }
            Action::JumpToSelected => {
                if let Some(label) = self.session.move_labels().get(self.selected) {
                    self.session.jump_to(label.step);
                }
                self.sync_selection();
            }
            Action::ToggleOrder => {
                self.session.toggle_move_order();
                self.sync_selection();
            }
            Action::Reset => {
                if self.session.is_game_over() {
                    self.session.reset();
                    self.cursor = Position::Center;
                    self.sync_selection();
                } else {
                    debug!("Reset is only offered once the game is over");
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Points the move-list selection at the step shown on the board.
    fn sync_selection(&mut self) {
        self.selected = self
            .session
            .move_labels()
            .iter()
            .position(|label| label.is_current)
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn play(app: &mut App, cells: &[usize]) {
        for &cell in cells {
            let position = Position::from_index(cell).expect("cell on board");
            app.apply(Action::PlayAt(position));
        }
    }

    #[test]
    fn test_cursor_play() {
        let mut app = App::new();
        app.apply(Action::MoveCursor(KeyCode::Up));
        app.apply(Action::Play);
        assert_eq!(app.session().history().len(), 2);
        assert!(!app.session().current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_selection_follows_current_step() {
        let mut app = App::new();
        play(&mut app, &[0, 4]);
        assert_eq!(app.selected(), 2);

        app.apply(Action::ToggleOrder);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_jump_from_move_list() {
        let mut app = App::new();
        play(&mut app, &[0, 4, 8]);
        app.apply(Action::SwitchFocus);
        assert_eq!(app.focus(), Focus::Moves);

        app.apply(Action::SelectPrevious);
        app.apply(Action::SelectPrevious);
        app.apply(Action::JumpToSelected);
        assert_eq!(app.session().current_step(), 1);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_select_next_clamps() {
        let mut app = App::new();
        play(&mut app, &[0]);
        app.apply(Action::SwitchFocus);
        app.apply(Action::SelectNext);
        app.apply(Action::SelectNext);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_reset_only_when_game_over() {
        let mut app = App::new();
        play(&mut app, &[0, 4]);
        app.apply(Action::Reset);
        assert_eq!(app.session().history().len(), 3);

        play(&mut app, &[1, 5, 2]);
        assert!(app.session().is_game_over());
        app.apply(Action::Reset);
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
