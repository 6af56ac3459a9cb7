//! Core game types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - Marks and cells via `Mark` and `Cell`
//! - Immutable boards
//! - Win detection over the eight fixed lines
//! - Immutable match history with time-travel branching
//!
//! All logic in this module is pure (no side effects apart from reading
//! the clock for history timestamps).

mod board;
mod history;
mod mark;
mod win;

pub use board::{Board, CELL_COUNT};
pub use history::{HistoryEntry, HistoryError, MatchHistory};
pub use mark::{Cell, Mark};
pub use win::{detect_winner, winning_line, WINNING_LINES};
