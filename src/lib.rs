//! Strictly Timetravel - tic-tac-toe with a time-travelling move history
//!
//! The game core is a small, pure state machine: a [`GameSession`] owns
//! every board snapshot played so far and the step currently shown, and
//! derives everything else (next player, winner, draw, move list) on read.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe core (session, history, win detection)
//! - **TUI**: ratatui front end driving the session from key presses
//! - **Replay**: headless playback of a move list for scripting
//! - **Config**: TOML settings for logging and the front end
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.play_move(cell);
//! }
//! let winner = session.winner().expect("X completes the top row");
//! assert_eq!(winner.player, Player::X);
//! assert_eq!(winner.indices(), [0, 1, 2]);
//!
//! // Travel back and branch: the old future is discarded.
//! session.jump_to(2);
//! session.play_move(8);
//! assert_eq!(session.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, LogSettings, Settings, UiSettings};

// Crate-level exports - Replay
pub use replay::{parse_cells, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Focus, draw, init_file_logging, map_key, move_cursor, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Coordinate, GRID, GameSession, GameStatus, History, HistoryEntry, LINES, Move,
    MoveEntry, MoveError, MoveLabel, Player, Position, SQUARES, SessionSnapshot, SortOrder, Square,
    WinResult, calculate_winner, is_full, move_labels,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::contracts::{
    Contract, GameNotOver, InBounds, JumpContract, LegalMove, PlayMoveContract, SquareIsEmpty,
};
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, SessionInvariants,
};
