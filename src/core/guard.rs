//! Guard predicates that decide whether a transition fires for a symbol.
//!
//! Guards are pure boolean functions over an input symbol. Two guards are
//! the same guard only if they share the same underlying function object;
//! behaviorally equivalent closures built separately are distinct.

use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe boolean function over a symbol.
type Predicate<Sym> = dyn Fn(&Sym) -> bool + Send + Sync;

/// Pure predicate over an input symbol.
///
/// Cloning a guard shares the predicate, so clones compare equal.
///
/// # Example
///
/// ```rust
/// use simplefsm::core::Guard;
///
/// let is_digit = Guard::new(|c: &char| c.is_ascii_digit());
///
/// assert!(is_digit.check(&'7'));
/// assert!(!is_digit.check(&'x'));
///
/// let same = is_digit.clone();
/// let lookalike = Guard::new(|c: &char| c.is_ascii_digit());
/// assert_eq!(is_digit, same);
/// assert_ne!(is_digit, lookalike);
/// ```
pub struct Guard<Sym> {
    predicate: Arc<Predicate<Sym>>,
}

impl<Sym> Guard<Sym> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic for a given symbol, since the
    /// engine may evaluate it any number of times while selecting a
    /// transition.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Sym) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that fires only for symbols equal to `expected`.
    pub fn equals(expected: Sym) -> Self
    where
        Sym: PartialEq + Send + Sync + 'static,
    {
        Self::new(move |symbol: &Sym| *symbol == expected)
    }

    /// Guard that fires for every symbol.
    pub fn any() -> Self
    where
        Sym: 'static,
    {
        Self::new(|_: &Sym| true)
    }

    /// Evaluate the predicate against a symbol.
    pub fn check(&self, symbol: &Sym) -> bool {
        (self.predicate)(symbol)
    }

    /// Address of the shared predicate, the guard's identity.
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.predicate) as *const ()
    }
}

impl<Sym> Clone for Guard<Sym> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// Identity comparison: equal only when both share one predicate.
impl<Sym> PartialEq for Guard<Sym> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl<Sym> Eq for Guard<Sym> {}

/// Prints the predicate's address.
impl<Sym> fmt::Debug for Guard<Sym> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guard({:p})", self.addr())
    }
}
