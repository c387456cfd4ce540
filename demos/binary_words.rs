//! Binary Words
//!
//! This example recognizes binary strings with an even number of ones,
//! feeding a few fixed lines through a custom symbol source.
//!
//! Key concepts:
//! - Implementing `SymbolSource` with a `post_transit` hook
//! - Declaring edges with the `transitions!` macro
//! - Re-seeding the source between runs
//!
//! Run with: cargo run --example binary_words
//! Set RUST_LOG=simplefsm=trace to see every transition.

use simplefsm::automaton::{Automaton, EndOfInput, SymbolSource};
use simplefsm::core::State;
use simplefsm::transitions;
use tracing_subscriber::EnvFilter;

/// Feeds the characters of one line and counts fired transitions.
#[derive(Default)]
struct LineSource {
    chars: Vec<char>,
    cursor: usize,
    fired: usize,
}

impl LineSource {
    fn load(&mut self, line: &str) {
        self.chars = line.chars().collect();
        self.cursor = 0;
        self.fired = 0;
    }
}

impl SymbolSource for LineSource {
    type Symbol = char;

    fn read_symbol(&mut self) -> Result<char, EndOfInput> {
        let symbol = self.chars.get(self.cursor).copied().ok_or(EndOfInput)?;
        self.cursor += 1;
        Ok(symbol)
    }

    fn post_transit(&mut self) {
        self.fired += 1;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Binary Words Example ===\n");

    let even = State::new("even").with_start(true).with_final(true);
    let odd = State::new("odd");

    let mut automaton = Automaton::new(LineSource::default());
    automaton
        .add_states([even.clone(), odd.clone()])
        .expect("states are distinct");
    automaton
        .add_transitions(transitions! {
            &even => &even, on '0';
            &even => &odd, on '1';
            &odd => &odd, on '0';
            &odd => &even, on '1';
        })
        .expect("transitions are distinct");

    for line in ["", "0110", "10101", "11a0"] {
        automaton.source_mut().load(line);

        match automaton.run() {
            Ok(accepted) => println!("{line:>6?}: accepted {} symbols", accepted.len()),
            Err(err) => println!("{line:>6?}: {err} [{}]", err.error_code()),
        }
        println!(
            "        fired {} transitions, path {:?}",
            automaton.source().fired,
            automaton.history().path()
        );
    }

    println!("\n=== Example Complete ===");
}
