//! Player marks and board cells.
//!
//! Marks are abstract identities. How they are drawn is a concern of
//! the UI layer (see [`crate::display::GlyphSet`]), never of the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players' symbols.
///
/// `X` always moves first, so the mark to move is a pure function of
/// the step index.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::Mark;
///
/// assert_eq!(Mark::for_step(0), Mark::X);
/// assert_eq!(Mark::for_step(3), Mark::O);
/// assert_eq!(Mark::X.opponent(), Mark::O);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Get the mark's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }

    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Mark to move after `step` moves have been played.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Self::X
        } else {
            Self::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single square of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Self::Marked(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_name_returns_correct_value() {
        assert_eq!(Mark::X.name(), "X");
        assert_eq!(Mark::O.name(), "O");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn for_step_alternates_starting_with_x() {
        let marks: Vec<Mark> = (0..6).map(Mark::for_step).collect();
        assert_eq!(
            marks,
            vec![Mark::X, Mark::O, Mark::X, Mark::O, Mark::X, Mark::O]
        );
    }

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
        assert_ne!(Mark::O.opponent(), Mark::O);
    }

    #[test]
    fn cell_exposes_its_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
        assert!(Cell::default().is_empty());
        assert!(!Cell::Marked(Mark::X).is_empty());
    }

    #[test]
    fn cell_serializes_correctly() {
        let cell = Cell::Marked(Mark::X);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
