//! Glyph mapping for UI layers.
//!
//! The engine works on abstract [`Mark`] identities. A UI picks a
//! [`GlyphSet`] and uses it to turn cells and statuses into text; the
//! glyphs never flow back into game logic.

use crate::core::{Board, Cell, Mark};
use crate::engine::Status;
use serde::{Deserialize, Serialize};

/// Strings used to draw each kind of cell.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::Mark;
/// use tictactoe_engine::display::GlyphSet;
/// use tictactoe_engine::engine::Status;
///
/// let glyphs = GlyphSet::default();
/// assert_eq!(glyphs.status(&Status::Winner(Mark::X)), "Winner: ❌");
/// assert_eq!(glyphs.status(&Status::NextTurn(Mark::O)), "Next player: ⭕️");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSet {
    pub x: String,
    pub o: String,
    pub empty: String,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::new("❌", "⭕️", "")
    }
}

impl GlyphSet {
    pub fn new(x: impl Into<String>, o: impl Into<String>, empty: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
            empty: empty.into(),
        }
    }

    /// Plain-text glyphs for terminals and logs.
    pub fn ascii() -> Self {
        Self::new("X", "O", " ")
    }

    pub fn mark(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    pub fn cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Marked(mark) => self.mark(mark),
        }
    }

    /// Status line, e.g. "Winner: ❌" or "Next player: ⭕️".
    pub fn status(&self, status: &Status) -> String {
        match status {
            Status::Winner(mark) => format!("Winner: {}", self.mark(*mark)),
            Status::NextTurn(mark) => format!("Next player: {}", self.mark(*mark)),
        }
    }

    /// The board as three rows of three glyphs.
    pub fn rows<'a>(&'a self, board: &Board) -> [[&'a str; 3]; 3] {
        let cells = board.cells();
        std::array::from_fn(|row| std::array::from_fn(|col| self.cell(cells[row * 3 + col])))
    }
}
