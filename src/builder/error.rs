//! Build errors for automaton and transition builders.

use crate::automaton::RegistrationError;
use thiserror::Error;

/// Errors that can occur when building automata and transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Symbol source not specified. Call .source(source) before .build()")]
    MissingSymbolSource,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition guard not specified. Call .when(predicate), .on(symbol) or .always()")]
    MissingGuard,

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
