//! The match engine consumed by UI layers.
//!
//! A UI reads [`GameEngine::current_board`], [`GameEngine::status`] and
//! [`GameEngine::move_list`] to render, and forwards user intents as
//! [`GameEngine::apply_move`] and [`GameEngine::jump_to`]. It holds no
//! game state of its own.
//!
//! Every mutating method takes `&mut self`, so sharing an engine between
//! threads requires a single writer (for example a `Mutex`).

pub mod error;
pub mod machine;
pub mod moves;
pub mod snapshot;
pub mod status;

pub use error::{EngineError, ErrorKind};
pub use machine::{GameEngine, MoveOutcome};
pub use moves::{label_for, MoveEntry, MoveList};
pub use snapshot::Snapshot;
pub use status::Status;
