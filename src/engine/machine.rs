//! Game engine that applies moves and navigates history.

use crate::core::{detect_winner, Board, HistoryEntry, MatchHistory, Mark, CELL_COUNT};
use crate::engine::error::EngineError;
use crate::engine::moves::MoveList;
use crate::engine::snapshot::Snapshot;
use crate::engine::status::Status;
use crate::rules::{MoveContext, MoveRejection, MoveRules};
use tracing::{debug, trace, warn};

/// Result of a call to [`GameEngine::apply_move`].
#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The move was played and is now the current step
    Applied { step: usize, cell: usize, mark: Mark },

    /// The move was ignored; engine state is unchanged
    Ignored(Vec<MoveRejection>),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Owns the state of one match.
///
/// The whole mutable state is the history and the current step.
/// Whose turn it is and whether the game is won are derived from them
/// on every query.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::Mark;
/// use tictactoe_engine::engine::{GameEngine, Status};
///
/// let mut engine = GameEngine::new();
/// for cell in [0, 3, 1, 4, 2] {
///     engine.apply_move(cell)?;
/// }
/// assert_eq!(engine.status(), Status::Winner(Mark::X));
///
/// engine.jump_to(0)?;
/// assert_eq!(engine.status(), Status::NextTurn(Mark::X));
/// # Ok::<(), tictactoe_engine::engine::EngineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    history: MatchHistory,
    step: usize,
    rules: MoveRules,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine at the empty starting board with the standard rules
    pub fn new() -> Self {
        Self::with_rules(MoveRules::standard())
    }

    /// Create an engine at the empty starting board with custom rules
    pub fn with_rules(rules: MoveRules) -> Self {
        Self {
            history: MatchHistory::new(),
            step: 0,
            rules,
        }
    }

    /// Board at the current step (pure)
    pub fn current_board(&self) -> &Board {
        // `step` is kept within `history` by `apply_move` and `jump_to`.
        &self.history.entries()[self.step].board
    }

    /// Mark to move at the current step (pure)
    pub fn current_turn(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Current step index (pure)
    pub fn step(&self) -> usize {
        self.step
    }

    /// Full history, including steps after the current one (pure)
    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn rules(&self) -> &MoveRules {
        &self.rules
    }

    /// Winner on the current board, if any (pure)
    pub fn winner(&self) -> Option<Mark> {
        detect_winner(self.current_board())
    }

    /// Check if the current board has a completed line (pure)
    pub fn is_decided(&self) -> bool {
        self.winner().is_some()
    }

    /// Cell played to reach the current step (pure)
    pub fn last_move(&self) -> Option<usize> {
        self.history.get(self.step).and_then(|entry| entry.cell)
    }

    /// Winner or next player for the current step (pure)
    pub fn status(&self) -> Status {
        Status::of(self.current_board(), self.current_turn())
    }

    /// Jump targets for every history step (pure)
    pub fn move_list(&self) -> MoveList<'_> {
        MoveList::new(&self.history)
    }

    /// Everything a UI needs to render the current step (pure)
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.current_board(),
            status: self.status(),
            step: self.step,
            turn: self.current_turn(),
            moves: self.move_list().collect(),
        }
    }

    /// Play the current turn's mark at `cell`.
    ///
    /// A move on an occupied cell or a decided board is ignored and
    /// reported as [`MoveOutcome::Ignored`]. Playing from a past step
    /// discards every entry after it before recording the new board.
    ///
    /// Returns [`EngineError::CellOutOfRange`] when `cell` is not 0-8.
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome, EngineError> {
        if cell >= CELL_COUNT {
            warn!(cell, "Rejected move: cell is off the board");
            return Err(EngineError::CellOutOfRange { cell });
        }

        let board = *self.current_board();
        let mark = self.current_turn();

        let rejections = self.rules.rejections(&MoveContext::new(board, cell, mark));
        if !rejections.is_empty() {
            debug!(step = self.step, cell, ?rejections, "Ignored move");
            return Ok(MoveOutcome::Ignored(rejections));
        }

        let entry = HistoryEntry::after_move(board.with_mark(cell, mark), cell);
        let history = self.history.branch(self.step, entry);
        let step = history.last_step();

        self.history = history;
        self.step = step;

        debug!(step, cell, mark = mark.name(), "Applied move");
        Ok(MoveOutcome::Applied { step, cell, mark })
    }

    /// Make `step` the current step without touching history.
    ///
    /// Returns [`EngineError::StepOutOfRange`] when `step` is not a
    /// recorded history index.
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejected jump: step is out of range");
            return Err(EngineError::StepOutOfRange { step, len });
        }

        trace!(from = self.step, to = step, "Jumped to step");
        self.step = step;
        Ok(())
    }
}
