//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, StateId, Transition};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<Sym> {
    from: Option<StateId>,
    to: Option<StateId>,
    guard: Option<Guard<Sym>>,
}

impl<Sym> TransitionBuilder<Sym> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<StateId>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateId>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Use an existing guard, sharing its identity.
    pub fn guard(mut self, guard: Guard<Sym>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Guard the transition with a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Sym) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Fire only on `symbol`.
    pub fn on(self, symbol: Sym) -> Self
    where
        Sym: PartialEq + Send + Sync + 'static,
    {
        self.guard(Guard::equals(symbol))
    }

    /// Fire on every symbol.
    pub fn always(self) -> Self
    where
        Sym: 'static,
    {
        self.guard(Guard::any())
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<Sym>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;

        Ok(Transition::new(from, to, guard))
    }
}

impl<Sym> Default for TransitionBuilder<Sym> {
    fn default() -> Self {
        Self::new()
    }
}
