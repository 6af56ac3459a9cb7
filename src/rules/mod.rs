//! Move preconditions as accumulating validation checks.
//!
//! A move is legal only if every check passes. Checks return
//! `stillwater`'s `Validation`, so a move that breaks several rules
//! reports every broken rule instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_engine::core::{Board, Mark};
//! use tictactoe_engine::rules::{MoveContext, MoveRejection, MoveRules};
//!
//! let board = Board::new().with_mark(4, Mark::X);
//! let rules = MoveRules::standard();
//!
//! let rejections = rules.rejections(&MoveContext::new(board, 4, Mark::O));
//! assert_eq!(rejections, vec![MoveRejection::CellOccupied { cell: 4, by: Mark::X }]);
//!
//! assert!(rules.rejections(&MoveContext::new(board, 0, Mark::O)).is_empty());
//! ```

pub mod checks;
pub mod context;
pub mod rejection;

pub use checks::{cell_is_empty, game_undecided, MoveCheck, MoveRules};
pub use context::MoveContext;
pub use rejection::MoveRejection;
