//! Index-based arena for automaton nodes.
//!
//! Nodes are addressed by [`NodeId`], a plain copyable index. Child edges and
//! failure links both store ids, so failure links never take part in
//! ownership: the arena owns every node and drops them all at once.

use std::ops::{Index, IndexMut};

use super::char_trait::AhoChar;
use super::node::AhoNode;

/// Identifier of a node, i.e. a state of the automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the position of this node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True if this is the root node.
    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// A growable arena that hands out [`NodeId`]s in allocation order.
///
/// The root is allocated on creation, so the arena is never empty.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<C: AhoChar> {
    nodes: Vec<AhoNode<C>>,
}

impl<C: AhoChar> NodeArena<C> {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![AhoNode::new(0)],
        }
    }

    /// Allocates a new childless node at `depth` and returns its id.
    pub fn alloc(&mut self, depth: usize) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("node arena exceeded u32::MAX states");
        self.nodes.push(AhoNode::new(depth));
        NodeId(id)
    }

    /// Returns the number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all nodes in allocation order.
    pub fn iter(&self) -> std::slice::Iter<'_, AhoNode<C>> {
        self.nodes.iter()
    }

    /// Follows child edges from the root along `pattern` without creating nodes.
    pub fn walk(&self, pattern: &[C]) -> Option<NodeId> {
        pattern
            .iter()
            .try_fold(NodeId::ROOT, |id, &ch| self[id].get(ch))
    }
}

impl<C: AhoChar> Index<NodeId> for NodeArena<C> {
    type Output = AhoNode<C>;

    #[inline]
    fn index(&self, id: NodeId) -> &AhoNode<C> {
        &self.nodes[id.index()]
    }
}

impl<C: AhoChar> IndexMut<NodeId> for NodeArena<C> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut AhoNode<C> {
        &mut self.nodes[id.index()]
    }
}
