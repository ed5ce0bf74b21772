//! # libaho
//!
//! An [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! multi-pattern matching library for Rust.
//!
//! The automaton is a trie over the patterns, extended with failure links and
//! output sets closed over those links. It scans a text in a single pass and
//! reports every occurrence of every pattern, overlapping and nested ones
//! included, in O(text length + number of matches) time.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`AhoChar`](aho::AhoChar)
//! - **Arena-allocated**: nodes live in one vector and failure links are plain indices
//! - **Streaming**: a [`Scanner`](aho::Scanner) can be fed a text in chunks
//! - **Thread-safe**: a built [`Automaton`](aho::Automaton) is immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use libaho::aho::build_automaton;
//!
//! let ac = build_automaton(["ab", "babb", "bb"]);
//! let found: Vec<_> = ac
//!     .find_iter("bababbaabb".chars())
//!     .map(|m| (m.pattern(), m.start(), m.end()))
//!     .collect();
//! assert_eq!(
//!     found,
//!     [(0, 1, 2), (0, 3, 4), (1, 2, 5), (2, 4, 5), (0, 7, 8), (2, 8, 9)]
//! );
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over the symbol type:
//!
//! ```
//! use libaho::aho::build_automaton;
//!
//! let ac = build_automaton([b"GATT".to_vec(), b"TTA".to_vec()]);
//! assert_eq!(ac.count_matches(b"GATTACA".iter().copied()), 2);
//! ```

#![warn(missing_docs)]

/// Core automaton data structures: trie, builder, transition function and scanner.
pub mod aho;
