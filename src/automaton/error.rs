//! Errors raised while registering and running an automaton.

use crate::core::StateId;
use std::fmt::{self, Debug};
use thiserror::Error;

/// Signal from a [`SymbolSource`](crate::automaton::SymbolSource) that no
/// further symbols are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No more symbols available, input end reached")]
pub struct EndOfInput;

/// Errors from `add_state`/`add_transition`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("state '{id}' is already defined")]
    DuplicatedState { id: StateId },

    #[error("there is already a transition from '{from}' to '{to}' with the same guard")]
    DuplicatedTransition { from: StateId, to: StateId },

    #[error("transition references unknown state '{id}'")]
    UnknownState { id: StateId },
}

impl RegistrationError {
    /// Returns a stable code identifying the error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistrationError::DuplicatedState { .. } => "DUPLICATED_STATE",
            RegistrationError::DuplicatedTransition { .. } => "DUPLICATED_TRANSITION",
            RegistrationError::UnknownState { .. } => "UNKNOWN_STATE",
        }
    }
}

/// Why a run rejected its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection<Sym> {
    /// No transition out of the current state accepts this symbol.
    Symbol(Sym),

    /// Input ran out while the automaton sat in a non-final state.
    EndOfString { state: StateId },
}

impl<Sym: Debug> fmt::Display for Rejection<Sym> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Symbol(symbol) => {
                write!(f, "{symbol:?} is not a recognized symbol by this automaton")
            }
            Rejection::EndOfString { state } => {
                write!(f, "input ended in non-final state '{state}'")
            }
        }
    }
}

/// Errors from [`Automaton::run`](crate::automaton::Automaton::run).
///
/// Shape errors are reported before the first symbol is read. The message
/// is only available when `Sym: Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError<Sym> {
    #[error("no start state defined for this automaton")]
    NoStartState,

    #[error("only one start state is allowed, found {count}")]
    MultipleStartStates { count: usize },

    #[error("no final state defined for this automaton")]
    NoFinalState,

    #[error("input rejected after {} accepted symbols: {rejection}", .accepted.len())]
    RejectedInput {
        accepted: Vec<Sym>,
        rejection: Rejection<Sym>,
    },
}

impl<Sym> RunError<Sym> {
    /// Returns a stable code identifying the error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            RunError::NoStartState => "NO_START_STATE",
            RunError::MultipleStartStates { .. } => "MULTIPLE_START_STATES",
            RunError::NoFinalState => "NO_FINAL_STATE",
            RunError::RejectedInput {
                rejection: Rejection::Symbol(_),
                ..
            } => "REJECTED_SYMBOL",
            RunError::RejectedInput {
                rejection: Rejection::EndOfString { .. },
                ..
            } => "REJECTED_STRING",
        }
    }

    /// Returns whether the input itself was rejected, as opposed to the
    /// automaton being malformed.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RunError::RejectedInput { .. })
    }

    /// Symbols consumed before the rejection, if this is one.
    pub fn accepted_symbols(&self) -> Option<&[Sym]> {
        match self {
            RunError::RejectedInput { accepted, .. } => Some(accepted),
            _ => None,
        }
    }

    /// Why the input was rejected, if it was.
    pub fn rejection(&self) -> Option<&Rejection<Sym>> {
        match self {
            RunError::RejectedInput { rejection, .. } => Some(rejection),
            _ => None,
        }
    }
}
