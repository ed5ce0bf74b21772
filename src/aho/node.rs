use smallvec::SmallVec;

use super::char_trait::AhoChar;
use super::children::{ChildIter, Children};
use super::node_arena::NodeId;

/// A state of the automaton: one prefix of some pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AhoNode<C: AhoChar> {
    children: Children<C>,
    failure: Option<NodeId>,
    output: SmallVec<[usize; 2]>,
    depth: usize,
}

impl<C: AhoChar> AhoNode<C> {
    /// Creates a childless node for a prefix of length `depth`.
    pub(crate) fn new(depth: usize) -> Self {
        AhoNode {
            children: Children::None,
            failure: None,
            output: SmallVec::new(),
            depth,
        }
    }

    /// Returns the child reached over `symbol`, or None if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<NodeId> {
        self.children.find(symbol)
    }

    /// Returns an iterator over all edges of this node, in symbol order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter::new(&self.children)
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The failure link, or None for the root and for nodes of an unbuilt trie.
    #[inline]
    pub fn failure(&self) -> Option<NodeId> {
        self.failure
    }

    /// Indices of the patterns that end in this state.
    ///
    /// Before the automaton is built this only holds the patterns equal to this
    /// node's prefix; afterwards it is closed over the failure chain.
    #[inline]
    pub fn output(&self) -> &[usize] {
        &self.output
    }

    /// Length of the prefix this node represents.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn insert(&mut self, symbol: C, child: NodeId) {
        self.children.insert(symbol, child);
    }

    pub(crate) fn set_failure(&mut self, failure: NodeId) {
        self.failure = Some(failure);
    }

    pub(crate) fn add_output(&mut self, pattern: usize) {
        self.output.push(pattern);
    }

    pub(crate) fn extend_output(&mut self, patterns: &[usize]) {
        self.output.extend_from_slice(patterns);
    }
}
