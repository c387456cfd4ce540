//! Core automaton value types.
//!
//! This module contains the pure building blocks of an automaton:
//! - `State` nodes identified by a `StateId`
//! - `Guard` predicates over input symbols
//! - `Transition` edges between states
//! - `RunHistory` traces of executed runs
//!
//! Nothing here performs I/O or owns a symbol source; the engine in
//! [`crate::automaton`] wires these values together.

mod guard;
mod history;
mod state;
mod transition;

pub use guard::Guard;
pub use history::{RunHistory, Step};
pub use state::{State, StateId};
pub use transition::Transition;
