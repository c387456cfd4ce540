//! The automaton engine and its boundary with the caller.
//!
//! # Key Concepts
//!
//! - **Automaton**: owns states and transitions, validates the shape and
//!   executes the run loop
//! - **SymbolSource**: the one capability the caller supplies, producing
//!   symbols until `EndOfInput`
//! - **EngineConfig**: switches for strict registration and run history
//!
//! A run is synchronous and single threaded. The only place it can block is
//! inside `read_symbol`.

mod config;
mod error;
mod machine;
mod source;

pub use config::EngineConfig;
pub use error::{EndOfInput, RegistrationError, Rejection, RunError};
pub use machine::Automaton;
pub use source::{IterSource, SymbolSource};
