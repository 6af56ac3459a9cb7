//! Engine error types.

use thiserror::Error;

/// Broad category of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a cell or step outside the valid range
    InvalidArgument,
    /// A snapshot could not be serialized
    Serialization,
}

/// Errors that can occur when driving a [`GameEngine`](super::GameEngine).
///
/// Illegal moves (occupied cell, decided game) are not errors; they
/// come back as [`MoveOutcome::Ignored`](super::MoveOutcome::Ignored).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Cell {cell} is off the board (valid cells: 0-8)")]
    CellOutOfRange { cell: usize },

    #[error("Step {step} is out of range (history holds {len} entries)")]
    StepOutOfRange { step: usize, len: usize },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CellOutOfRange { .. } | Self::StepOutOfRange { .. } => ErrorKind::InvalidArgument,
            Self::SerializationFailed(_) => ErrorKind::Serialization,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
