//! Read-only view of a match for UI layers.

use crate::core::{Board, Mark};
use crate::engine::error::EngineError;
use crate::engine::moves::MoveEntry;
use crate::engine::status::Status;
use serde::{Deserialize, Serialize};

/// Everything a UI needs to render one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the current step
    pub board: Board,
    /// Winner or next player
    pub status: Status,
    /// Current step index
    pub step: usize,
    /// Mark to move at the current step
    pub turn: Mark,
    /// Jump targets, one per history entry
    pub moves: Vec<MoveEntry>,
}

impl Snapshot {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::SerializationFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, EngineError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::SerializationFailed(e.to_string()))
    }
}
