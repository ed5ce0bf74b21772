use std::collections::VecDeque;
use std::fmt;

use super::char_trait::AhoChar;
use super::node::AhoNode;
use super::node_arena::{NodeArena, NodeId};
use super::scanner::{Match, Matches, Scanner};
use super::trie::IntoPattern;

/// The goto-with-fallback step shared by construction and scanning.
///
/// Follows failure links from `state` until a node with an edge on `symbol` is
/// found or the chain ends at the root, then takes that edge if it exists.
#[inline]
pub(crate) fn follow<C: AhoChar>(nodes: &NodeArena<C>, mut state: NodeId, symbol: C) -> NodeId {
    loop {
        let node = &nodes[state];
        if let Some(child) = node.get(symbol) {
            return child;
        }
        match node.failure() {
            Some(failure) => state = failure,
            None => return state,
        }
    }
}

/// A complete Aho-Corasick automaton over symbols of type `C`.
///
/// Built once by [`build_automaton`](super::builder::build_automaton) and
/// read-only afterwards, so it can be shared between threads and scanned
/// concurrently.
///
/// # Examples
///
/// ```
/// use libaho::aho::builder::build_automaton;
///
/// let ac = build_automaton(["he", "she", "his", "hers"]);
/// let found: Vec<_> = ac
///     .scan("ushers".chars())
///     .iter()
///     .map(|m| (ac.pattern(m.pattern()).iter().collect::<String>(), m.start(), m.end()))
///     .collect();
/// assert_eq!(
///     found,
///     [
///         (String::from("she"), 1, 3),
///         (String::from("he"), 2, 3),
///         (String::from("hers"), 2, 5),
///     ]
/// );
/// ```
#[derive(Clone)]
pub struct Automaton<C: AhoChar> {
    nodes: NodeArena<C>,
    patterns: Vec<Vec<C>>,
}

impl<C: AhoChar> Automaton<C> {
    pub(crate) fn from_parts(nodes: NodeArena<C>, patterns: Vec<Vec<C>>) -> Self {
        Automaton { nodes, patterns }
    }

    /// Returns the initial state.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns the node with the given id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &AhoNode<C> {
        &self.nodes[id]
    }

    /// The failure link of `state`; None only for the root.
    #[inline]
    pub fn failure(&self, state: NodeId) -> Option<NodeId> {
        self.nodes[state].failure()
    }

    /// Indices of every pattern that ends when the automaton is in `state`.
    #[inline]
    pub fn output(&self, state: NodeId) -> &[usize] {
        self.nodes[state].output()
    }

    /// Moves from `state` on `symbol`.
    ///
    /// A symbol that no pattern continues with falls back along failure links,
    /// possibly all the way to the root.
    #[inline]
    pub fn transition(&self, state: NodeId, symbol: C) -> NodeId {
        follow(&self.nodes, state, symbol)
    }

    /// Returns the number of states, root included.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the state for `prefix` if it is a prefix of some pattern.
    ///
    /// Walks child edges only; meant for diagnostics, not for matching.
    pub fn lookup(&self, prefix: impl IntoPattern<C>) -> Option<NodeId> {
        self.nodes.walk(&prefix.collect_pattern())
    }

    /// Returns the number of patterns, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Returns the pattern with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.pattern_count()`.
    pub fn pattern(&self, index: usize) -> &[C] {
        &self.patterns[index]
    }

    /// Returns the length in symbols of the pattern with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.pattern_count()`.
    pub fn pattern_len(&self, index: usize) -> usize {
        self.patterns[index].len()
    }

    /// Returns a streaming cursor positioned at the root.
    pub fn scanner(&self) -> Scanner<'_, C> {
        Scanner::new(self)
    }

    /// Lazily yields every occurrence of every pattern in `text`.
    pub fn find_iter<I>(&self, text: I) -> Matches<'_, C, I::IntoIter>
    where
        I: IntoIterator<Item = C>,
    {
        Matches::new(self.scanner(), text.into_iter())
    }

    /// Returns every occurrence of every pattern in `text`, ordered by end position.
    ///
    /// Matches ending at the same position are listed longest first.
    pub fn scan<I>(&self, text: I) -> Vec<Match>
    where
        I: IntoIterator<Item = C>,
    {
        self.find_iter(text).collect()
    }

    /// Returns the number of occurrences of all patterns in `text`.
    pub fn count_matches<I>(&self, text: I) -> usize
    where
        I: IntoIterator<Item = C>,
    {
        let mut scanner = self.scanner();
        text.into_iter().map(|ch| scanner.step(ch).len()).sum()
    }

    /// Reconstructs the prefix of every state, indexed by [`NodeId::index`].
    pub fn labels(&self) -> Vec<Vec<C>> {
        let mut labels = vec![Vec::new(); self.nodes.len()];
        let mut queue = VecDeque::from([NodeId::ROOT]);
        while let Some(id) = queue.pop_front() {
            for (ch, child) in self.nodes[id].children() {
                let mut label = labels[id.index()].clone();
                label.push(ch);
                labels[child.index()] = label;
                queue.push_back(child);
            }
        }
        labels
    }

    /// States in breadth-first order, root first.
    fn level_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([NodeId::ROOT]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(self.nodes[id].children().map(|(_, child)| child));
        }
        order
    }
}

impl<C: AhoChar> fmt::Debug for Automaton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("state_count", &self.state_count())
            .field("pattern_count", &self.pattern_count())
            .finish()
    }
}

/// Debug dump of every state in breadth-first order: its label, failure
/// target, edges and output set. Not a stable format.
impl<C: AhoChar + fmt::Display> fmt::Display for Automaton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        let label = |id: NodeId| -> String {
            if id.is_root() {
                "<root>".to_string()
            } else {
                labels[id.index()].iter().map(|ch| ch.to_string()).collect()
            }
        };

        for id in self.level_order() {
            let node = &self.nodes[id];
            writeln!(f, "** {}", label(id))?;
            if let Some(failure) = node.failure() {
                writeln!(f, "\tfailure : {}", label(failure))?;
            }
            for (ch, child) in node.children() {
                writeln!(f, "\t{} : {}", ch, label(child))?;
            }
            if !node.output().is_empty() {
                writeln!(f, "\toutput {:?}", node.output())?;
            }
        }
        Ok(())
    }
}
