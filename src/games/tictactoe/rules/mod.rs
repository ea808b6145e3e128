//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history bookkeeping so the session can
//! derive its status on every read instead of storing it.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, WinResult, calculate_winner};
