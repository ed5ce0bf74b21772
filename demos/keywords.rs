//! Example: building a keyword highlighter around an Automaton.
//!
//! This shows how to create a small high-level API on top of the raw automaton
//! interface. The `Keywords` struct wraps an `Automaton` and provides
//! occurrence listing, per-keyword counts and highlighting.
//!
//! Run with: cargo run --example keywords

use libaho::aho::{build_automaton, Automaton};

/// A set of keywords that can be located in any text.
struct Keywords {
    automaton: Automaton<char>,
}

impl Keywords {
    fn new(words: &[&str]) -> Self {
        Keywords {
            automaton: build_automaton(words),
        }
    }

    fn keyword(&self, index: usize) -> String {
        self.automaton.pattern(index).iter().collect()
    }

    /// Returns (keyword, start, end) for every occurrence, overlaps included.
    fn occurrences(&self, text: &str) -> Vec<(String, usize, usize)> {
        self.automaton
            .find_iter(text.chars())
            .map(|m| (self.keyword(m.pattern()), m.start(), m.end()))
            .collect()
    }

    /// Returns how often each keyword occurs, in keyword order.
    fn counts(&self, text: &str) -> Vec<(String, usize)> {
        let mut counts = vec![0; self.automaton.pattern_count()];
        for m in self.automaton.find_iter(text.chars()) {
            counts[m.pattern()] += 1;
        }
        counts
            .into_iter()
            .enumerate()
            .map(|(i, n)| (self.keyword(i), n))
            .collect()
    }

    /// Wraps every symbol covered by some keyword in brackets.
    fn highlight(&self, text: &str) -> String {
        let symbols: Vec<char> = text.chars().collect();
        let mut covered = vec![false; symbols.len()];
        for m in self.automaton.find_iter(symbols.iter().copied()) {
            for flag in &mut covered[m.start()..=m.end()] {
                *flag = true;
            }
        }
        symbols
            .iter()
            .zip(&covered)
            .map(|(ch, &hit)| if hit { format!("[{ch}]") } else { ch.to_string() })
            .collect()
    }
}

fn main() {
    let keywords = Keywords::new(&["he", "she", "his", "hers"]);
    let text = "ahishers";

    println!("Occurrences in {text:?}:");
    for (word, start, end) in keywords.occurrences(text) {
        println!("  {word}: {start}..={end}");
    }

    println!("\nCounts:");
    for (word, n) in keywords.counts(text) {
        println!("  {word}: {n}");
    }

    println!("\nHighlighted: {}", keywords.highlight(text));
}
