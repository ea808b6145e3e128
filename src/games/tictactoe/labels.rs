//! Move-list labels for time travel.

use super::Position;
use super::action::Move;
use super::history::History;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption for the sort toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLabel {
    /// History step this label jumps to.
    pub step: usize,
    /// Ply that produced the step; `None` for the game start.
    pub placed: Option<Move>,
    /// True for the step currently shown on the board.
    pub is_current: bool,
}

impl MoveLabel {
    /// Square marked by this step, if any.
    pub fn position(&self) -> Option<Position> {
        self.placed.map(|m| m.position)
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(position) => write!(f, "Go to move #{} {}", self.step, position.coordinate()),
            None => write!(f, "Go to game start"),
        }
    }
}

/// Builds the move list for `history`, oldest first, then applies `order`.
///
/// Reversal happens on the returned list only; `history` is never reordered.
#[instrument(skip(history), fields(len = history.len()))]
pub fn move_labels(history: &History, current_step: usize, order: SortOrder) -> Vec<MoveLabel> {
    let mut labels: Vec<MoveLabel> = (0..history.len())
        .map(|step| MoveLabel {
            step,
            placed: history.move_at(step),
            is_current: step == current_step,
        })
        .collect();

    if order == SortOrder::Descending {
        labels.reverse();
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_labels_text() {
        let history = History::from_positions(&[Position::Center, Position::MiddleRight]);
        let labels = move_labels(&history, 2, SortOrder::Ascending);
        let text: Vec<String> = labels.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (2, 2)".to_string(),
                "Go to move #2 (3, 2)".to_string(),
            ]
        );
        assert_eq!(labels[1].placed, Some(Move::new(Player::X, Position::Center)));
    }

    #[test]
    fn test_current_step_marked() {
        let history = History::from_positions(&[Position::Center, Position::TopLeft]);
        let labels = move_labels(&history, 1, SortOrder::Ascending);
        let current: Vec<usize> = labels.iter().filter(|l| l.is_current).map(|l| l.step).collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_descending_reverses_presentation_only() {
        let history = History::from_positions(&[Position::Center, Position::TopLeft]);
        let before = history.clone();
        let steps: Vec<usize> = move_labels(&history, 0, SortOrder::Descending)
            .iter()
            .map(|l| l.step)
            .collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(history, before);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default().toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().label(), "Ascending");
    }
}
