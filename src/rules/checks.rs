//! Move rules evaluated with `Validation`.

use crate::core::{detect_winner, Cell};
use crate::rules::context::MoveContext;
use crate::rules::rejection::MoveRejection;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A single move check.
///
/// Plain function pointers keep rule sets `Clone`, `Debug` and
/// `Send + Sync`.
pub type MoveCheck = fn(&MoveContext) -> Validation<(), NonEmptyVec<MoveRejection>>;

/// Rejects any move once a line has been completed.
pub fn game_undecided(context: &MoveContext) -> Validation<(), NonEmptyVec<MoveRejection>> {
    match detect_winner(&context.board) {
        Some(winner) => Validation::fail(MoveRejection::GameDecided { winner }),
        None => Validation::success(()),
    }
}

/// Rejects a move onto a cell that already holds a mark.
pub fn cell_is_empty(context: &MoveContext) -> Validation<(), NonEmptyVec<MoveRejection>> {
    match context.target() {
        Some(Cell::Marked(by)) => Validation::fail(MoveRejection::CellOccupied {
            cell: context.cell,
            by,
        }),
        _ => Validation::success(()),
    }
}

/// Ordered set of checks a move must pass.
#[derive(Clone, Debug)]
pub struct MoveRules {
    checks: Vec<MoveCheck>,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl MoveRules {
    /// The standard rules: the game is undecided and the cell is empty.
    pub fn standard() -> Self {
        Self {
            checks: vec![game_undecided as MoveCheck, cell_is_empty],
        }
    }

    /// Add an extra check. Checks can only forbid moves.
    pub fn require(mut self, check: MoveCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run all checks, accumulating ALL rejections.
    pub fn evaluate(&self, context: &MoveContext) -> Validation<(), NonEmptyVec<MoveRejection>> {
        let results: Vec<Validation<(), NonEmptyVec<MoveRejection>>> =
            self.checks.iter().map(|check| check(context)).collect();

        Validation::all_vec(results).map(|_| ())
    }

    /// Rejections for a move, in check order. Empty means the move is legal.
    pub fn rejections(&self, context: &MoveContext) -> Vec<MoveRejection> {
        match self.evaluate(context) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}
