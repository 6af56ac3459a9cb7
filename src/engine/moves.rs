//! Lazy move list for history navigation.

use crate::core::MatchHistory;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::ops::Range;

/// A labelled step the UI can offer as a "jump to" target.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveEntry {
    pub label: String,
    pub step: usize,
}

impl MoveEntry {
    pub fn new(step: usize) -> Self {
        Self {
            label: label_for(step),
            step,
        }
    }
}

/// Label for a step: "game start" for step 0, "move #n" otherwise.
pub fn label_for(step: usize) -> String {
    if step == 0 {
        "game start".to_string()
    } else {
        format!("move #{step}")
    }
}

/// Iterator over the [`MoveEntry`] of every history step.
///
/// Labels are built on demand. The list borrows the history, so calling
/// [`GameEngine::move_list`](super::GameEngine::move_list) again always
/// yields the same entries until the next move or jump.
#[derive(Clone, Debug)]
pub struct MoveList<'a> {
    history: &'a MatchHistory,
    steps: Range<usize>,
}

impl<'a> MoveList<'a> {
    pub(crate) fn new(history: &'a MatchHistory) -> Self {
        Self {
            history,
            steps: 0..history.len(),
        }
    }

    /// History the list was taken from.
    pub fn history(&self) -> &'a MatchHistory {
        self.history
    }
}

impl Iterator for MoveList<'_> {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.steps.next().map(MoveEntry::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl DoubleEndedIterator for MoveList<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.steps.next_back().map(MoveEntry::new)
    }
}

impl ExactSizeIterator for MoveList<'_> {}

impl FusedIterator for MoveList<'_> {}
