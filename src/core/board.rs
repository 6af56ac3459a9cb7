//! The nine-cell board.

use super::mark::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A 3x3 board, addressed by index 0-8 in row-major order.
///
/// Boards are immutable values: [`Board::with_mark`] returns a new
/// board and leaves the receiver untouched, so a board can be stored
/// in history as a snapshot.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::{Board, Cell, Mark};
///
/// let board = Board::new();
/// let next = board.with_mark(4, Mark::X);
///
/// assert_eq!(board.get(4), Some(Cell::Empty));
/// assert_eq!(next.get(4), Some(Cell::Marked(Mark::X)));
/// assert_eq!(next.get(9), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The all-empty starting board.
    pub const EMPTY: Board = Board {
        cells: [Cell::Empty; CELL_COUNT],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from its cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Return a new board with `mark` placed at `index`.
    ///
    /// Callers are expected to have validated `index`; an index off the
    /// board yields an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        if let Some(cell) = cells.get_mut(index) {
            *cell = Cell::Marked(mark);
        }
        Self { cells }
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Marked(mark) => mark.name(),
                };
                f.write_str(symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board, Board::EMPTY);
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn with_mark_is_immutable() {
        let board = Board::new();
        let next = board.with_mark(0, Mark::X);

        assert_eq!(board.get(0), Some(Cell::Empty));
        assert_eq!(next.get(0), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn with_mark_off_board_is_unchanged() {
        let board = Board::new().with_mark(2, Mark::O);
        assert_eq!(board.with_mark(CELL_COUNT, Mark::X), board);
    }

    #[test]
    fn count_tracks_each_mark() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .with_mark(4, Mark::O)
            .with_mark(8, Mark::X);

        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn full_board_is_detected() {
        let board = Board::from_cells([Cell::Marked(Mark::X); CELL_COUNT]);
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn display_renders_grid() {
        let board = Board::new().with_mark(0, Mark::X).with_mark(4, Mark::O);
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn board_serializes_correctly() {
        let board = Board::new().with_mark(3, Mark::O);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
