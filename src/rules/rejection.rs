//! Reasons a move is ignored.

use crate::core::Mark;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was turned into a no-op.
///
/// Rejections are expected game outcomes, not caller errors: the engine
/// reports them and leaves its state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("Game already won by {winner}")]
    GameDecided { winner: Mark },

    #[error("Cell {cell} already holds {by}")]
    CellOccupied { cell: usize, by: Mark },

    /// An extra rule added with `MoveRules::require` forbade the move
    #[error("Move to cell {cell} breaks a rule: {message}")]
    RuleViolated { cell: usize, message: String },
}

impl MoveRejection {
    /// Rejection for an extra rule, naming the broken rule.
    pub fn rule(cell: usize, message: impl Into<String>) -> Self {
        Self::RuleViolated {
            cell,
            message: message.into(),
        }
    }
}
