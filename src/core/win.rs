//! Win detection.

use super::board::Board;
use super::mark::{Cell, Mark};

/// The eight winning lines, in the order they are checked: rows,
/// then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Return the mark that completes a line on `board`, if any.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete
/// one wins, so a board with two complete lines always reports the same
/// mark.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::{detect_winner, Board, Mark};
///
/// let board = Board::new()
///     .with_mark(2, Mark::O)
///     .with_mark(4, Mark::O)
///     .with_mark(6, Mark::O);
///
/// assert_eq!(detect_winner(&board), Some(Mark::O));
/// assert_eq!(detect_winner(&Board::new()), None);
/// ```
pub fn detect_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

/// The first complete line on `board`, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[b] == cells[a] && cells[c] == cells[a]
    })
}
