//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and a macro for declaring automata
//! with minimal boilerplate. Builders collect states and transitions and
//! register them on [`AutomatonBuilder::build`], surfacing the same
//! registration errors as calling the engine directly.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
pub use transition::TransitionBuilder;
