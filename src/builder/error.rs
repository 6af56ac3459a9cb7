//! Build errors for the engine builder.

use crate::engine::EngineError;
use crate::rules::MoveRejection;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Move {index} (cell {cell}) was rejected: {reasons:?}")]
    MoveRejected {
        index: usize,
        cell: usize,
        reasons: Vec<MoveRejection>,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
