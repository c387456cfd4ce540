//! Property-based tests for the automaton engine.
//!
//! These tests use proptest to check acceptance and rejection properties
//! over randomly generated words for a fixed two-state automaton.

use proptest::prelude::*;
use simplefsm::automaton::{Automaton, IterSource, Rejection, RunError};
use simplefsm::core::{Guard, State, StateId, Transition};
use std::vec::IntoIter;

type WordAutomaton = Automaton<IterSource<IntoIter<char>>>;

/// `a` (start) and `b` (final); 'a' leads to `a`, 'b' leads to `b`.
fn ab_automaton() -> WordAutomaton {
    let a = State::new("a").with_start(true);
    let b = State::new("b").with_final(true);

    let mut automaton = Automaton::new(IterSource::new(Vec::new()));
    automaton.add_states([a.clone(), b.clone()]).unwrap();
    automaton
        .add_transitions([
            Transition::new(&a, &a, Guard::equals('a')),
            Transition::new(&b, &b, Guard::equals('b')),
            Transition::new(&a, &b, Guard::equals('b')),
            Transition::new(&b, &a, Guard::equals('a')),
        ])
        .unwrap();
    automaton
}

fn run(automaton: &mut WordAutomaton, word: &[char]) -> Result<Vec<char>, RunError<char>> {
    automaton.source_mut().reset(word.to_vec());
    automaton.run()
}

prop_compose! {
    fn ab_word()(word in prop::collection::vec(prop::sample::select(vec!['a', 'b']), 0..32)) -> Vec<char> {
        word
    }
}

proptest! {
    #[test]
    fn accepted_iff_word_ends_with_b(word in ab_word()) {
        let mut automaton = ab_automaton();
        let result = run(&mut automaton, &word);

        if word.last() == Some(&'b') {
            prop_assert_eq!(result, Ok(word.clone()));
        } else {
            let expected = RunError::RejectedInput {
                accepted: word.clone(),
                rejection: Rejection::EndOfString { state: StateId::new("a") },
            };
            prop_assert_eq!(result, Err(expected));
        }
    }

    #[test]
    fn rejection_payload_is_prefix_before_bad_symbol(
        prefix in ab_word(),
        bad in prop::sample::select(vec!['c', 'x', '0']),
        suffix in ab_word(),
    ) {
        let mut automaton = ab_automaton();
        let mut word = prefix.clone();
        word.push(bad);
        word.extend(suffix);

        let err = run(&mut automaton, &word).unwrap_err();

        prop_assert_eq!(err.accepted_symbols(), Some(&prefix[..]));
        prop_assert_eq!(err.rejection(), Some(&Rejection::Symbol(bad)));
    }

    #[test]
    fn history_tracks_every_accepted_symbol(word in ab_word()) {
        let mut automaton = ab_automaton();
        let _ = run(&mut automaton, &word);

        let history = automaton.history();
        prop_assert_eq!(history.len(), word.len());
        for (i, step) in history.steps().iter().enumerate() {
            prop_assert_eq!(step.position, i);
            prop_assert_eq!(step.symbol, word[i]);
        }
    }

    #[test]
    fn runs_do_not_leak_into_each_other(first in ab_word(), second in ab_word()) {
        let mut reused = ab_automaton();
        let _ = run(&mut reused, &first);
        let reused_result = run(&mut reused, &second);

        let mut fresh = ab_automaton();
        let fresh_result = run(&mut fresh, &second);

        prop_assert_eq!(reused_result, fresh_result);
        prop_assert_eq!(reused.current_state(), fresh.current_state());
    }

    #[test]
    fn guard_is_deterministic(symbol in any::<char>()) {
        let guard = Guard::equals('a');
        prop_assert_eq!(guard.check(&symbol), guard.check(&symbol));
    }

    #[test]
    fn duplicate_state_leaves_registry_unchanged(ids in prop::collection::vec("[a-e]", 1..12)) {
        let mut automaton = ab_automaton();
        let mut registered = vec!["a".to_string(), "b".to_string()];

        for id in ids {
            let before = automaton.states().len();
            let result = automaton.add_state(State::new(id.as_str()));
            if registered.contains(&id) {
                prop_assert!(result.is_err());
                prop_assert_eq!(automaton.states().len(), before);
            } else {
                prop_assert!(result.is_ok());
                registered.push(id);
            }
        }

        prop_assert_eq!(automaton.states().len(), registered.len());
    }
}
