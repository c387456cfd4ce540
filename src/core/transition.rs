//! Guarded edges between two states.

use super::guard::Guard;
use super::state::StateId;

/// Directed edge from one state to another, fired when its guard accepts
/// the symbol just read.
///
/// Endpoints are stored as [`StateId`]s. Two transitions are equal when both
/// endpoints match and they share the same guard (see [`Guard`] equality).
///
/// # Example
///
/// ```rust
/// use simplefsm::core::{Guard, State, Transition};
///
/// let a = State::new("a").with_start(true);
/// let b = State::new("b").with_final(true);
///
/// let on_b = Transition::new(&a, &b, Guard::equals('b'));
///
/// assert_eq!(on_b.from_state().as_str(), "a");
/// assert_eq!(on_b.to_state().as_str(), "b");
/// assert!(on_b.accepts(&'b'));
/// assert!(!on_b.accepts(&'a'));
/// ```
#[derive(Debug)]
pub struct Transition<Sym> {
    from: StateId,
    to: StateId,
    guard: Guard<Sym>,
}

impl<Sym> Transition<Sym> {
    pub fn new(from: impl Into<StateId>, to: impl Into<StateId>, guard: Guard<Sym>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            guard,
        }
    }

    /// Build a transition straight from a predicate closure.
    pub fn when<F>(from: impl Into<StateId>, to: impl Into<StateId>, predicate: F) -> Self
    where
        F: Fn(&Sym) -> bool + Send + Sync + 'static,
    {
        Self::new(from, to, Guard::new(predicate))
    }

    pub fn from_state(&self) -> &StateId {
        &self.from
    }

    pub fn to_state(&self) -> &StateId {
        &self.to
    }

    pub fn guard(&self) -> &Guard<Sym> {
        &self.guard
    }

    /// Check whether this transition fires for `symbol` (pure).
    pub fn accepts(&self, symbol: &Sym) -> bool {
        self.guard.check(symbol)
    }

    /// Check whether this transition leaves `state` and fires for `symbol`.
    pub fn can_fire(&self, state: &StateId, symbol: &Sym) -> bool {
        self.from == *state && self.accepts(symbol)
    }
}

impl<Sym> Clone for Transition<Sym> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<Sym> PartialEq for Transition<Sym> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.guard == other.guard
    }
}

impl<Sym> Eq for Transition<Sym> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn can_fire_matches_from_state() {
        let a = State::new("a");
        let b = State::new("b");
        let transition = Transition::new(&a, &b, Guard::equals('x'));

        assert!(transition.can_fire(a.id(), &'x'));
        assert!(!transition.can_fire(b.id(), &'x'));
    }

    #[test]
    fn can_fire_respects_guard() {
        let transition = Transition::when("a", "b", |n: &u32| *n > 10);

        assert!(transition.can_fire(&StateId::new("a"), &11));
        assert!(!transition.can_fire(&StateId::new("a"), &3));
    }

    #[test]
    fn clones_are_equal() {
        let transition = Transition::when("a", "b", |c: &char| c.is_alphabetic());
        assert_eq!(transition, transition.clone());
    }

    #[test]
    fn shared_guard_on_different_edges_is_not_equal() {
        let guard = Guard::equals('a');
        let ab = Transition::new("a", "b", guard.clone());
        let ba = Transition::new("b", "a", guard.clone());
        let ab_again = Transition::new("a", "b", guard);

        assert_ne!(ab, ba);
        assert_eq!(ab, ab_again);
    }

    #[test]
    fn separately_built_guards_make_distinct_transitions() {
        let first = Transition::new("a", "b", Guard::equals('a'));
        let second = Transition::new("a", "b", Guard::equals('a'));

        assert_ne!(first, second);
    }
}
