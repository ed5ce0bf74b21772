use std::slice;

use super::automaton::Automaton;
use super::char_trait::AhoChar;
use super::node_arena::NodeId;

/// One occurrence of a pattern in a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pattern: usize,
    end: usize,
    len: usize,
}

impl Match {
    /// Index of the matched pattern.
    #[inline]
    pub fn pattern(&self) -> usize {
        self.pattern
    }

    /// Position of the last symbol of the occurrence.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Position of the first symbol of the occurrence.
    ///
    /// For the empty pattern this is `end() + 1`.
    #[inline]
    pub fn start(&self) -> usize {
        self.end + 1 - self.len
    }

    /// Length of the matched pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the empty pattern matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A resumable cursor over an [`Automaton`].
///
/// The scanner only holds the current state and the number of symbols consumed,
/// so a text can be fed in arbitrary chunks, or abandoned between any two symbols.
#[derive(Clone, Debug)]
pub struct Scanner<'a, C: AhoChar> {
    automaton: &'a Automaton<C>,
    state: NodeId,
    position: usize,
}

impl<'a, C: AhoChar> Scanner<'a, C> {
    /// Creates a scanner at the root of `automaton`.
    pub fn new(automaton: &'a Automaton<C>) -> Self {
        Scanner {
            automaton,
            state: automaton.root(),
            position: 0,
        }
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> NodeId {
        self.state
    }

    /// Number of symbols consumed so far, i.e. the position of the next symbol.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns to the root and position zero.
    pub fn reset(&mut self) {
        self.state = self.automaton.root();
        self.position = 0;
    }

    /// Consumes one symbol and returns the patterns ending on it.
    #[inline]
    pub fn step(&mut self, symbol: C) -> &'a [usize] {
        self.state = self.automaton.transition(self.state, symbol);
        self.position += 1;
        self.automaton.output(self.state)
    }

    /// Consumes `text` and appends every match to `matches`.
    ///
    /// Positions continue from earlier calls.
    pub fn feed<I>(&mut self, text: I, matches: &mut Vec<Match>)
    where
        I: IntoIterator<Item = C>,
    {
        for ch in text {
            let end = self.position;
            let found = self.step(ch);
            matches.extend(found.iter().map(|&pattern| self.make_match(pattern, end)));
        }
    }

    fn make_match(&self, pattern: usize, end: usize) -> Match {
        Match {
            pattern,
            end,
            len: self.automaton.pattern_len(pattern),
        }
    }
}

/// Lazy iterator over the matches in a text, returned by
/// [`Automaton::find_iter`].
#[derive(Clone, Debug)]
pub struct Matches<'a, C: AhoChar, I> {
    scanner: Scanner<'a, C>,
    text: I,
    pending: slice::Iter<'a, usize>,
    end: usize,
}

impl<'a, C: AhoChar, I: Iterator<Item = C>> Matches<'a, C, I> {
    pub(crate) fn new(scanner: Scanner<'a, C>, text: I) -> Self {
        Matches {
            scanner,
            text,
            pending: [].iter(),
            end: 0,
        }
    }
}

impl<C: AhoChar, I: Iterator<Item = C>> Iterator for Matches<'_, C, I> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(&pattern) = self.pending.next() {
                return Some(self.scanner.make_match(pattern, self.end));
            }
            let ch = self.text.next()?;
            self.end = self.scanner.position();
            self.pending = self.scanner.step(ch).iter();
        }
    }
}
