//! Macros for ergonomic automaton construction.

/// Build a `Vec<Transition>` of symbol-matching edges.
///
/// Each entry reads `from => to, on symbol;` and becomes a transition
/// guarded by [`Guard::equals`](crate::core::Guard::equals). Every entry
/// gets its own guard, so no two generated transitions compare equal.
///
/// # Example
///
/// ```
/// use simplefsm::transitions;
/// use simplefsm::core::Transition;
///
/// let edges: Vec<Transition<char>> = transitions! {
///     "a" => "a", on 'a';
///     "a" => "b", on 'b';
/// };
///
/// assert_eq!(edges.len(), 2);
/// assert!(edges[1].accepts(&'b'));
/// ```
#[macro_export]
macro_rules! transitions {
    ($($from:expr => $to:expr, on $symbol:expr);* $(;)?) => {
        vec![
            $(
                $crate::core::Transition::new(
                    $from,
                    $to,
                    $crate::core::Guard::equals($symbol),
                )
            ),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, StateId, Transition};

    #[test]
    fn transitions_macro_builds_edges_in_order() {
        let a = State::new("a");
        let b = State::new("b");

        let edges: Vec<Transition<char>> = transitions! {
            &a => &a, on 'a';
            &b => &b, on 'b';
            &a => &b, on 'b';
            &b => &a, on 'a'
        };

        let pairs: Vec<(&str, &str)> = edges
            .iter()
            .map(|t| (t.from_state().as_str(), t.to_state().as_str()))
            .collect();
        assert_eq!(pairs, [("a", "a"), ("b", "b"), ("a", "b"), ("b", "a")]);
        assert!(edges[2].accepts(&'b'));
        assert!(!edges[2].accepts(&'a'));
    }

    #[test]
    fn transitions_macro_accepts_ids() {
        let edges: Vec<Transition<u8>> = transitions! {
            StateId::new("x") => "y", on 1;
        };

        assert_eq!(edges[0].from_state(), &StateId::new("x"));
    }

    #[test]
    fn transitions_macro_allows_empty() {
        let edges: Vec<Transition<u8>> = transitions! {};
        assert!(edges.is_empty());
    }
}
