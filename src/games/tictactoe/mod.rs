//! Tic-tac-toe with a time-travelling move history.
//!
//! [`GameSession`] is the only stateful type. Everything else is either an
//! immutable value ([`Board`], [`HistoryEntry`], [`Move`]) or a pure
//! function over one ([`calculate_winner`], [`GameStatus::of`]).

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod labels;
mod phases;
mod position;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use history::{History, HistoryEntry};
pub use labels::{MoveLabel, SortOrder, move_labels};
pub use phases::GameStatus;
pub use position::{Coordinate, Position};
pub use rules::{LINES, WinResult, calculate_winner, is_full};
pub use session::{GameSession, MoveEntry, SessionSnapshot};
pub use types::{Board, GRID, Player, SQUARES, Square};
