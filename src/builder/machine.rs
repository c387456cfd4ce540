//! Builder for constructing automata.

use crate::automaton::{Automaton, EngineConfig, SymbolSource};
use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{State, Transition};

/// Builder for constructing automata with a fluent API.
///
/// States and transitions are registered in the order they were given when
/// [`build`](Self::build) runs, so registration errors surface there.
pub struct AutomatonBuilder<Src: SymbolSource> {
    states: Vec<State>,
    transitions: Vec<Transition<Src::Symbol>>,
    source: Option<Src>,
    config: EngineConfig,
}

impl<Src: SymbolSource> AutomatonBuilder<Src> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            source: None,
            config: EngineConfig::default(),
        }
    }

    /// Set the symbol source (required).
    pub fn source(mut self, source: Src) -> Self {
        self.source = Some(source);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<Src::Symbol>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<Src::Symbol>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(
        mut self,
        transitions: impl IntoIterator<Item = Transition<Src::Symbol>>,
    ) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the automaton.
    ///
    /// The start/final shape is not checked here; `run` does that.
    pub fn build(self) -> Result<Automaton<Src>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSymbolSource)?;

        let mut automaton = Automaton::with_config(source, self.config);
        automaton.add_states(self.states)?;
        automaton.add_transitions(self.transitions)?;

        Ok(automaton)
    }
}

impl<Src: SymbolSource> Default for AutomatonBuilder<Src> {
    fn default() -> Self {
        Self::new()
    }
}
