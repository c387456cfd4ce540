//! The capability an automaton needs from its caller: a stream of symbols.

use super::error::EndOfInput;

/// Supplies input symbols to an [`Automaton`](super::Automaton).
///
/// Only `read_symbol` is required. The engine calls it exactly once per
/// transition attempt, and each call must advance the source. The engine
/// never rewinds a source, so running the same automaton again requires the
/// caller to re-seed it through
/// [`Automaton::source_mut`](super::Automaton::source_mut).
///
/// `pre_transit` runs before every read and `post_transit` after every
/// fired transition. Both default to no-ops.
///
/// # Example
///
/// ```rust
/// use simplefsm::automaton::{EndOfInput, SymbolSource};
///
/// struct Countdown(u32);
///
/// impl SymbolSource for Countdown {
///     type Symbol = u32;
///
///     fn read_symbol(&mut self) -> Result<u32, EndOfInput> {
///         if self.0 == 0 {
///             return Err(EndOfInput);
///         }
///         self.0 -= 1;
///         Ok(self.0)
///     }
/// }
///
/// let mut source = Countdown(2);
/// assert_eq!(source.read_symbol(), Ok(1));
/// assert_eq!(source.read_symbol(), Ok(0));
/// assert_eq!(source.read_symbol(), Err(EndOfInput));
/// ```
pub trait SymbolSource {
    type Symbol;

    /// Produce the next symbol, or `EndOfInput` once exhausted.
    fn read_symbol(&mut self) -> Result<Self::Symbol, EndOfInput>;

    /// Hook invoked before each symbol is read.
    fn pre_transit(&mut self) {}

    /// Hook invoked after each successful transition.
    fn post_transit(&mut self) {}
}

impl<S: SymbolSource + ?Sized> SymbolSource for &mut S {
    type Symbol = S::Symbol;

    fn read_symbol(&mut self) -> Result<Self::Symbol, EndOfInput> {
        (**self).read_symbol()
    }

    fn pre_transit(&mut self) {
        (**self).pre_transit()
    }

    fn post_transit(&mut self) {
        (**self).post_transit()
    }
}

/// Symbol source backed by any iterator.
///
/// ```rust
/// use simplefsm::automaton::{IterSource, SymbolSource};
///
/// let mut source = IterSource::new("ab".chars());
/// assert_eq!(source.read_symbol(), Ok('a'));
///
/// source.reset("z".chars());
/// assert_eq!(source.read_symbol(), Ok('z'));
/// assert!(source.read_symbol().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
        }
    }

    /// Replace the remaining input.
    pub fn reset(&mut self, iter: impl IntoIterator<IntoIter = I>) {
        self.iter = iter.into_iter();
    }

    /// Unwrap the iterator with whatever input remains.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> SymbolSource for IterSource<I> {
    type Symbol = I::Item;

    fn read_symbol(&mut self) -> Result<I::Item, EndOfInput> {
        self.iter.next().ok_or(EndOfInput)
    }
}
