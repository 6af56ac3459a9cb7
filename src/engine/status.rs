//! Derived match status.

use crate::core::{detect_winner, Board, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the UI should announce for a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete
    Winner(Mark),
    /// No line is complete; `Mark` moves next
    NextTurn(Mark),
}

impl Status {
    /// Derive the status of `board` with `turn` to move.
    pub fn of(board: &Board, turn: Mark) -> Self {
        match detect_winner(board) {
            Some(winner) => Self::Winner(winner),
            None => Self::NextTurn(turn),
        }
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Winner(mark) => Some(mark),
            Self::NextTurn(_) => None,
        }
    }

    pub fn is_decided(self) -> bool {
        matches!(self, Self::Winner(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(mark) => write!(f, "Winner: {mark}"),
            Self::NextTurn(mark) => write!(f, "Next player: {mark}"),
        }
    }
}
