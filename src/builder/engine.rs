//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::engine::{GameEngine, MoveOutcome};
use crate::rules::{MoveCheck, MoveRules};

/// Builder for constructing a [`GameEngine`] with a fluent API.
///
/// Useful for restoring a match from a list of played cells, or for
/// starting from a position in tests.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::builder::EngineBuilder;
/// use tictactoe_engine::core::Mark;
///
/// let engine = EngineBuilder::new()
///     .moves([4, 0, 8])
///     .at_step(2)
///     .build()?;
///
/// assert_eq!(engine.history().len(), 4);
/// assert_eq!(engine.step(), 2);
/// assert_eq!(engine.current_turn(), Mark::X);
/// # Ok::<(), tictactoe_engine::builder::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    moves: Vec<usize>,
    step: Option<usize>,
    extra_rules: Vec<MoveCheck>,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single move to replay.
    pub fn play(mut self, cell: usize) -> Self {
        self.moves.push(cell);
        self
    }

    /// Add multiple moves to replay, in order.
    pub fn moves(mut self, cells: impl IntoIterator<Item = usize>) -> Self {
        self.moves.extend(cells);
        self
    }

    /// Step to jump to after replaying. Defaults to the last move.
    pub fn at_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Add a rule on top of the standard ones.
    pub fn rule(mut self, check: MoveCheck) -> Self {
        self.extra_rules.push(check);
        self
    }

    /// Build the engine.
    /// Returns an error if a replayed move is rejected or out of range.
    pub fn build(self) -> Result<GameEngine, BuildError> {
        let rules = self
            .extra_rules
            .into_iter()
            .fold(MoveRules::standard(), MoveRules::require);

        let mut engine = GameEngine::with_rules(rules);
        for (index, cell) in self.moves.into_iter().enumerate() {
            if let MoveOutcome::Ignored(reasons) = engine.apply_move(cell)? {
                return Err(BuildError::MoveRejected {
                    index,
                    cell,
                    reasons,
                });
            }
        }

        if let Some(step) = self.step {
            engine.jump_to(step)?;
        }

        Ok(engine)
    }
}
