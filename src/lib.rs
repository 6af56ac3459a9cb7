//! Tictactoe Engine: a pure tic-tac-toe game-state engine
//!
//! The engine owns the whole state of a match: an ordered history of
//! board snapshots and the index of the step being viewed. Everything
//! else (whose turn it is, whether the game is won, the list of jump
//! targets) is derived from those two values on demand.
//!
//! # Core Concepts
//!
//! - **Board**: Nine cells in row-major order, each empty or marked
//! - **History**: Immutable snapshots, branched when a move is made from a past step
//! - **Rules**: Accumulating checks that turn illegal moves into no-ops
//! - **Engine**: Applies moves, jumps through history, answers queries
//!
//! # Example
//!
//! ```rust
//! use tictactoe_engine::core::Mark;
//! use tictactoe_engine::engine::{GameEngine, MoveOutcome, Status};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(4)?;
//! engine.apply_move(0)?;
//!
//! // Occupied cells are ignored, not errors
//! assert!(matches!(engine.apply_move(4)?, MoveOutcome::Ignored(_)));
//!
//! // Time travel: rewind and diverge
//! engine.jump_to(1)?;
//! engine.apply_move(8)?;
//! assert_eq!(engine.history().len(), 3);
//! assert_eq!(engine.status(), Status::NextTurn(Mark::X));
//!
//! let labels: Vec<String> = engine.move_list().map(|entry| entry.label).collect();
//! assert_eq!(labels, ["game start", "move #1", "move #2"]);
//! # Ok::<(), tictactoe_engine::engine::EngineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod display;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use crate::core::{detect_winner, Board, Cell, MatchHistory, Mark};
pub use display::GlyphSet;
pub use engine::{EngineError, GameEngine, MoveOutcome, Status};
