//! Builder API for engine construction.
//!
//! This module provides a fluent builder for creating engines that
//! start from a replayed position or carry extra rules.

pub mod engine;
pub mod error;

pub use engine::EngineBuilder;
pub use error::BuildError;
