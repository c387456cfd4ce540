//! Automaton states and their identity keys.
//!
//! A state is a named node carrying two flags: whether the automaton starts
//! there and whether ending there accepts the input. Identity is the id alone,
//! the flags never take part in equality.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identity key of a [`State`].
///
/// Transitions refer to states through their id, never through the state
/// value itself, so an automaton can own its states in a flat list.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets `&str` keys look up maps keyed by `StateId`.
impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lets a `&State` stand in wherever a transition endpoint is expected.
impl From<&State> for StateId {
    fn from(state: &State) -> Self {
        state.id.clone()
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

/// A node of the automaton.
///
/// # Example
///
/// ```rust
/// use simplefsm::core::State;
///
/// let idle = State::new("idle").with_start(true);
/// let done = State::new("done").with_final(true);
///
/// assert!(idle.is_start());
/// assert!(!idle.is_final());
/// assert!(done.is_final());
/// assert_ne!(idle, done);
/// ```
#[derive(Clone, Debug)]
pub struct State {
    id: StateId,
    start: bool,
    final_: bool,
}

impl State {
    /// Create a state that is neither start nor final.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            start: false,
            final_: false,
        }
    }

    /// Set the start flag, consuming the state.
    pub fn with_start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }

    /// Set the final flag, consuming the state.
    pub fn with_final(mut self, final_: bool) -> Self {
        self.final_ = final_;
        self
    }

    /// Get the state's identity key.
    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// Check if the automaton starts in this state.
    pub fn is_start(&self) -> bool {
        self.start
    }

    /// Mark or unmark this state as the start state.
    pub fn set_start(&mut self, start: bool) {
        self.start = start;
    }

    /// Check if ending a run here accepts the input.
    pub fn is_final(&self) -> bool {
        self.final_
    }

    /// Mark or unmark this state as accepting.
    pub fn set_final(&mut self, final_: bool) {
        self.final_ = final_;
    }
}

/// States are equal when their ids are, whatever their flags.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
