//! SimpleFSM: a deterministic finite state machine engine
//!
//! An automaton is a set of states, a set of guarded transitions between
//! them, and a caller-supplied source of input symbols. Running it consumes
//! symbols one at a time and reports whether the input is accepted.
//!
//! # Core Concepts
//!
//! - **State**: a named node, optionally start and/or final
//! - **Transition**: a directed edge guarded by a pure predicate over symbols
//! - **SymbolSource**: the caller's side of the contract, producing symbols
//!   until it signals `EndOfInput`
//! - **Automaton**: validates the shape (one start state, at least one final
//!   state) and executes the run loop
//!
//! # Example
//!
//! ```rust
//! use simplefsm::automaton::{Automaton, IterSource, Rejection, RunError};
//! use simplefsm::core::{Guard, State, Transition};
//!
//! let a = State::new("a").with_start(true);
//! let b = State::new("b").with_final(true);
//!
//! let mut fsm = Automaton::new(IterSource::new("aabbabab".chars()));
//! fsm.add_states([a.clone(), b.clone()]).unwrap();
//! fsm.add_transitions([
//!     Transition::new(&a, &a, Guard::equals('a')),
//!     Transition::new(&b, &b, Guard::equals('b')),
//!     Transition::new(&a, &b, Guard::equals('b')),
//!     Transition::new(&b, &a, Guard::equals('a')),
//! ])
//! .unwrap();
//!
//! assert_eq!(fsm.run().unwrap().len(), 8);
//!
//! fsm.source_mut().reset("aac".chars());
//! let err = fsm.run().unwrap_err();
//! assert_eq!(err.rejection(), Some(&Rejection::Symbol('c')));
//! assert!(matches!(err, RunError::RejectedInput { .. }));
//! ```

pub mod automaton;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::automaton::{
    Automaton, EndOfInput, RegistrationError, Rejection, RunError, SymbolSource,
};
pub use crate::builder::{AutomatonBuilder, BuildError, TransitionBuilder};
pub use crate::core::{Guard, State, StateId, Transition};
