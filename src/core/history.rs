//! Per-run trace of the transitions an automaton took.
//!
//! The engine records one [`Step`] for every symbol it consumes, so after a
//! run the history explains how the automaton reached its current state (or
//! where it stopped, for a rejected input).

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// `position` is the zero-based index of `symbol` within the run's input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step<Sym> {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Sym,
    pub position: usize,
    pub timestamp: DateTime<Utc>,
}

/// Ordered steps of one run.
///
/// # Example
///
/// ```rust
/// use simplefsm::automaton::{Automaton, IterSource};
/// use simplefsm::core::{Guard, State, Transition};
///
/// let a = State::new("a").with_start(true);
/// let b = State::new("b").with_final(true);
///
/// let mut automaton = Automaton::new(IterSource::new("ab".chars()));
/// automaton.add_states([a.clone(), b.clone()]).unwrap();
/// automaton
///     .add_transitions([
///         Transition::new(&a, &a, Guard::equals('a')),
///         Transition::new(&a, &b, Guard::equals('b')),
///     ])
///     .unwrap();
/// automaton.run().unwrap();
///
/// let history = automaton.history();
/// let path: Vec<&str> = history.path().iter().map(|id| id.as_str()).collect();
/// assert_eq!(path, ["a", "a", "b"]);
/// assert_eq!(history.steps()[1].symbol, 'b');
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunHistory<Sym> {
    steps: Vec<Step<Sym>>,
}

impl<Sym> Default for RunHistory<Sym> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sym> RunHistory<Sym> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step<Sym>) {
        self.steps.push(step);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    /// States visited in order: the origin of the first step, then the
    /// target of every step. Empty when nothing was consumed.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Wall-clock time between the first and the last step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.first()?, self.steps.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Steps in the order they were taken.
    pub fn steps(&self) -> &[Step<Sym>] {
        &self.steps
    }

    /// Number of recorded steps, one per consumed symbol.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, to: &str, symbol: char, position: usize) -> Step<char> {
        Step {
            from: StateId::new(from),
            to: StateId::new(to),
            symbol,
            position,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: RunHistory<char> = RunHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    fn history_of(steps: impl IntoIterator<Item = Step<char>>) -> RunHistory<char> {
        let mut history = RunHistory::new();
        for step in steps {
            history.push(step);
        }
        history
    }

    #[test]
    fn path_returns_state_sequence() {
        let history = history_of([step("a", "a", 'a', 0), step("a", "b", 'b', 1)]);

        let path: Vec<&str> = history.path().into_iter().map(StateId::as_str).collect();
        assert_eq!(path, ["a", "a", "b"]);
    }

    #[test]
    fn push_and_clear_mutate_in_place() {
        let mut history = RunHistory::new();
        history.push(step("a", "b", 'b', 0));
        assert_eq!(history.steps()[0].symbol, 'b');

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn single_step_has_zero_duration() {
        let history = history_of([step("a", "b", 'b', 0)]);
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last_step() {
        let start = Utc::now();
        let mut first = step("a", "a", 'a', 0);
        first.timestamp = start;
        let mut last = step("a", "b", 'b', 1);
        last.timestamp = start + chrono::Duration::milliseconds(25);

        let history = history_of([first, last]);
        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = history_of([step("a", "b", 'b', 0)]);

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RunHistory<char> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
