use super::char_trait::AhoChar;
use super::node_arena::NodeId;

/// A compact representation of the child edges of a node that doesn't allocate until
/// there are at least three children.
///
/// Edges are kept sorted by symbol in every variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: AhoChar> {
    /// No children.
    None,
    /// Exactly one child (symbol, node).
    One((C, NodeId)),
    /// Exactly two children (symbol1, node1, symbol2, node2), `symbol1 < symbol2`.
    Two((C, NodeId, C, NodeId)),
    /// Three or more children stored in a vector.
    Many(Vec<(C, NodeId)>),
}

impl<C: AhoChar> Children<C> {
    /// Gets the edge at the specified index, in symbol order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the child reached over `symbol`, if that edge exists.
    #[inline]
    pub fn find(&self, symbol: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == symbol).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if symbol == *c1 {
                    Some(*n1)
                } else if symbol == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .binary_search_by(|&(ch, _)| ch.cmp(&symbol))
                .ok()
                .map(|pos| children[pos].1),
        }
    }

    /// Adds the edge `symbol -> child` in sorted position.
    ///
    /// The symbol must not already have an edge.
    pub(crate) fn insert(&mut self, symbol: C, child: NodeId) {
        debug_assert!(self.find(symbol).is_none(), "insert: symbol already exists");
        *self = match std::mem::replace(self, Children::None) {
            Children::None => Children::One((symbol, child)),
            Children::One((c1, n1)) => {
                if symbol < c1 {
                    Children::Two((symbol, child, c1, n1))
                } else {
                    Children::Two((c1, n1, symbol, child))
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                let mut v = vec![(c1, n1), (c2, n2), (symbol, child)];
                v.sort_by_key(|&(c, _)| c);
                Children::Many(v)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|&(c, _)| c < symbol);
                children.insert(pos, (symbol, child));
                Children::Many(children)
            }
        };
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }
}

/// An iterator over the edges of a node, in symbol order.
#[derive(Clone)]
pub struct ChildIter<'a, C: AhoChar> {
    children: &'a Children<C>,
    index: usize,
}

impl<'a, C: AhoChar> ChildIter<'a, C> {
    pub(crate) fn new(children: &'a Children<C>) -> Self {
        ChildIter { children, index: 0 }
    }
}

impl<C: AhoChar> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: AhoChar> ExactSizeIterator for ChildIter<'_, C> {}
