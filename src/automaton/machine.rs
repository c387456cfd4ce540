//! The automaton engine: state/transition registry plus the run loop.

use crate::automaton::config::EngineConfig;
use crate::automaton::error::{EndOfInput, Rejection, RegistrationError, RunError};
use crate::automaton::source::SymbolSource;
use crate::core::{RunHistory, State, StateId, Step, Transition};
use chrono::Utc;
use std::fmt::Debug;

/// Deterministic finite automaton driven by a [`SymbolSource`].
///
/// States and transitions are kept in registration order. When several
/// transitions out of the current state accept a symbol, the one registered
/// first fires.
///
/// # Example
///
/// ```rust
/// use simplefsm::automaton::{Automaton, IterSource};
/// use simplefsm::core::{Guard, State, Transition};
///
/// let even = State::new("even").with_start(true).with_final(true);
/// let odd = State::new("odd");
///
/// let mut automaton = Automaton::new(IterSource::new(vec![1, 1, 0]));
/// automaton.add_states([even.clone(), odd.clone()]).unwrap();
/// automaton
///     .add_transitions([
///         Transition::new(&even, &even, Guard::equals(0)),
///         Transition::new(&even, &odd, Guard::equals(1)),
///         Transition::new(&odd, &odd, Guard::equals(0)),
///         Transition::new(&odd, &even, Guard::equals(1)),
///     ])
///     .unwrap();
///
/// assert_eq!(automaton.run().unwrap(), vec![1, 1, 0]);
/// ```
pub struct Automaton<Src: SymbolSource> {
    states: Vec<State>,
    transitions: Vec<Transition<Src::Symbol>>,
    source: Src,
    config: EngineConfig,
    current: Option<StateId>,
    accepted: Vec<Src::Symbol>,
    history: RunHistory<Src::Symbol>,
    end_of_input: bool,
}

impl<Src: SymbolSource> Automaton<Src> {
    /// Create an empty automaton reading from `source`.
    pub fn new(source: Src) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    pub fn with_config(source: Src, config: EngineConfig) -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            source,
            config,
            current: None,
            accepted: Vec::new(),
            history: RunHistory::new(),
            end_of_input: false,
        }
    }

    /// Register a state. Fails if a state with the same id exists; the
    /// registry is left unchanged in that case.
    pub fn add_state(&mut self, state: State) -> Result<(), RegistrationError> {
        if self.contains_state(state.id()) {
            return Err(RegistrationError::DuplicatedState {
                id: state.id().clone(),
            });
        }

        tracing::debug!(
            "Registered state '{}' (start={}, final={})",
            state.id(),
            state.is_start(),
            state.is_final()
        );
        self.states.push(state);
        Ok(())
    }

    /// Register states in order, stopping at the first duplicate. States
    /// added before the failure stay registered.
    pub fn add_states(
        &mut self,
        states: impl IntoIterator<Item = State>,
    ) -> Result<(), RegistrationError> {
        for state in states {
            self.add_state(state)?;
        }
        Ok(())
    }

    /// Register a transition.
    ///
    /// Fails on an equal transition already registered and, when
    /// `strict_states` is on, on endpoints that are not registered states.
    pub fn add_transition(
        &mut self,
        transition: Transition<Src::Symbol>,
    ) -> Result<(), RegistrationError> {
        if self.transitions.contains(&transition) {
            return Err(RegistrationError::DuplicatedTransition {
                from: transition.from_state().clone(),
                to: transition.to_state().clone(),
            });
        }

        if self.config.strict_states {
            for id in [transition.from_state(), transition.to_state()] {
                if !self.contains_state(id) {
                    return Err(RegistrationError::UnknownState { id: id.clone() });
                }
            }
        }

        tracing::debug!(
            "Registered transition '{}' -> '{}'",
            transition.from_state(),
            transition.to_state()
        );
        self.transitions.push(transition);
        Ok(())
    }

    /// Register transitions in order, stopping at the first failure.
    pub fn add_transitions(
        &mut self,
        transitions: impl IntoIterator<Item = Transition<Src::Symbol>>,
    ) -> Result<(), RegistrationError> {
        for transition in transitions {
            self.add_transition(transition)?;
        }
        Ok(())
    }

    pub fn contains_state(&self, id: &StateId) -> bool {
        self.states.iter().any(|s| s.id() == id)
    }

    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.iter().find(|s| s.id() == id)
    }

    /// Mutable access to a registered state, for adjusting its flags.
    /// The id itself cannot change.
    pub fn state_mut(&mut self, id: &StateId) -> Option<&mut State> {
        self.states.iter_mut().find(|s| s.id() == id)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition<Src::Symbol>] {
        &self.transitions
    }

    /// State reached by the last run, `None` before the first run.
    pub fn current_state(&self) -> Option<&StateId> {
        self.current.as_ref()
    }

    /// Whether the current state is a registered final state.
    pub fn is_final(&self) -> bool {
        self.current
            .as_ref()
            .and_then(|id| self.state(id))
            .is_some_and(State::is_final)
    }

    /// Symbols accepted by the last run so far.
    pub fn accepted_symbols(&self) -> &[Src::Symbol] {
        &self.accepted
    }

    /// Whether the last run consumed its whole input.
    pub fn reached_end_of_input(&self) -> bool {
        self.end_of_input
    }

    /// Transitions taken by the last run. Empty when `record_history` is off.
    pub fn history(&self) -> &RunHistory<Src::Symbol> {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Mutable access to the source, e.g. to re-seed it between runs.
    pub fn source_mut(&mut self) -> &mut Src {
        &mut self.source
    }

    /// Consume the automaton and hand back its source.
    ///
    /// ```rust
    /// use simplefsm::automaton::{Automaton, IterSource};
    ///
    /// let automaton = Automaton::new(IterSource::new(vec!['x', 'y']));
    /// let rest: Vec<char> = automaton.into_source().into_inner().collect();
    /// assert_eq!(rest, ['x', 'y']);
    /// ```
    pub fn into_source(self) -> Src {
        self.source
    }

    /// Check the start/final shape and return the start state's id.
    fn validate_shape(&self) -> Result<StateId, RunError<Src::Symbol>> {
        let mut starts = self.states.iter().filter(|s| s.is_start());
        let start = starts.next().ok_or(RunError::NoStartState)?;
        let extra = starts.count();
        if extra > 0 {
            return Err(RunError::MultipleStartStates { count: extra + 1 });
        }

        if !self.states.iter().any(State::is_final) {
            return Err(RunError::NoFinalState);
        }

        Ok(start.id().clone())
    }

    fn reset_run(&mut self) {
        self.current = None;
        self.accepted.clear();
        self.history.clear();
        self.end_of_input = false;
    }
}

impl<Src> Automaton<Src>
where
    Src: SymbolSource,
    Src::Symbol: Clone + Debug,
{
    /// Run the automaton over the source's remaining input.
    ///
    /// Returns every consumed symbol, in order, when the input ends in a
    /// final state. Fails before reading anything if the automaton does not
    /// have exactly one start state and at least one final state, and fails
    /// with [`RunError::RejectedInput`] as soon as a symbol matches no
    /// transition or when the input ends in a non-final state.
    pub fn run(&mut self) -> Result<Vec<Src::Symbol>, RunError<Src::Symbol>> {
        self.reset_run();
        let start = self.validate_shape()?;
        tracing::debug!("Starting run from '{}'", start);
        self.current = Some(start.clone());

        let mut current = start;
        while !self.end_of_input {
            self.source.pre_transit();

            let symbol = match self.source.read_symbol() {
                Ok(symbol) => symbol,
                Err(EndOfInput) => {
                    self.end_of_input = true;
                    break;
                }
            };

            let next = self
                .transitions
                .iter()
                .find(|t| t.can_fire(&current, &symbol))
                .map(|t| t.to_state().clone());

            let Some(next) = next else {
                tracing::debug!(
                    "Rejected {:?} in state '{}' after {} symbols",
                    symbol,
                    current,
                    self.accepted.len()
                );
                return Err(RunError::RejectedInput {
                    accepted: self.accepted.clone(),
                    rejection: Rejection::Symbol(symbol),
                });
            };

            tracing::trace!("'{}' --{:?}--> '{}'", current, symbol, next);
            if self.config.record_history {
                self.history.push(Step {
                    from: current,
                    to: next.clone(),
                    symbol: symbol.clone(),
                    position: self.accepted.len(),
                    timestamp: Utc::now(),
                });
            }
            self.accepted.push(symbol);
            self.current = Some(next.clone());
            current = next;

            self.source.post_transit();
        }

        if !self.is_final() {
            tracing::debug!(
                "Input ended in non-final state '{}' after {} symbols",
                current,
                self.accepted.len()
            );
            return Err(RunError::RejectedInput {
                accepted: self.accepted.clone(),
                rejection: Rejection::EndOfString { state: current },
            });
        }

        tracing::debug!(
            "Accepted {} symbols, finished in '{}'",
            self.accepted.len(),
            current
        );
        Ok(self.accepted.clone())
    }
}
