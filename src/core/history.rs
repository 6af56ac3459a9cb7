//! Match history tracking.
//!
//! Provides the ordered list of board snapshots a match has passed
//! through, with the branching rule used by time travel.

use super::board::Board;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Snapshot of the board after one move.
///
/// Entry 0 of every history is the empty starting board and has no
/// `cell`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move
    pub board: Board,
    /// Cell played to reach this board
    pub cell: Option<usize>,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// The starting entry: an empty board with no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            cell: None,
            recorded_at: Utc::now(),
        }
    }

    /// Entry for `board`, reached by playing `cell`.
    pub fn after_move(board: Board, cell: usize) -> Self {
        Self {
            board,
            cell: Some(cell),
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered history of board snapshots.
///
/// A history is never empty: it always starts with the empty board.
/// Changes go through [`MatchHistory::branch`], which returns a new
/// history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::{Board, HistoryEntry, MatchHistory, Mark};
///
/// let history = MatchHistory::new();
/// let first = Board::new().with_mark(0, Mark::X);
///
/// let next = history.branch(0, HistoryEntry::after_move(first, 0));
///
/// assert_eq!(history.len(), 1); // Original unchanged
/// assert_eq!(next.len(), 2);
/// assert_eq!(next.board(1), Some(&first));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct MatchHistory {
    entries: Vec<HistoryEntry>,
}

/// Errors that can occur when loading a history
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    #[error("History must hold at least the starting board")]
    Empty,
}

/// Wire shape of [`MatchHistory`], checked before use.
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawHistory> for MatchHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self {
            entries: raw.entries,
        })
    }
}

impl Default for MatchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchHistory {
    /// Create a history holding only the starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Keep entries `0..=step`, then append `entry`, returning a new history.
    ///
    /// Entries after `step` are the redo branch of a match that has been
    /// rewound; playing a move from `step` discards them. A `step` past
    /// the end keeps every entry.
    pub fn branch(&self, step: usize, entry: HistoryEntry) -> Self {
        let keep = step.saturating_add(1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(entry);
        Self { entries }
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history starts with the empty board and never shrinks below it.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Board recorded at `step`.
    pub fn board(&self, step: usize) -> Option<&Board> {
        self.entries.get(step).map(|entry| &entry.board)
    }

    /// Index of the most recent entry.
    pub fn last_step(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Boards in order, starting with the empty board.
    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.entries.iter().map(|entry| &entry.board)
    }

    /// Cells played, in order.
    pub fn moves(&self) -> Vec<usize> {
        self.entries.iter().filter_map(|entry| entry.cell).collect()
    }

    /// Time elapsed from the first to the last entry.
    ///
    /// Returns `None` while only the starting board is recorded.
    pub fn duration(&self) -> Option<Duration> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) if self.entries.len() > 1 => last
                .recorded_at
                .signed_duration_since(first.recorded_at)
                .to_std()
                .ok(),
            _ => None,
        }
    }
}
