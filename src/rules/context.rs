//! Context provided to move checks.

use crate::core::{Board, Cell, Mark};

/// Context provided to move checks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveContext {
    pub board: Board,
    pub cell: usize,
    pub turn: Mark,
}

impl MoveContext {
    pub fn new(board: Board, cell: usize, turn: Mark) -> Self {
        Self { board, cell, turn }
    }

    /// Current content of the target cell (`None` if off the board)
    pub fn target(&self) -> Option<Cell> {
        self.board.get(self.cell)
    }
}
