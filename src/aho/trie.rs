use smallvec::SmallVec;

use super::char_trait::AhoChar;
use super::node::AhoNode;
use super::node_arena::{NodeArena, NodeId};

/// Trait for types that can be used as a pattern.
///
/// Implemented for common string and sequence types so that [`Trie::insert`]
/// and [`build_automaton`](super::builder::build_automaton) accept them directly
/// without manual conversion.
pub trait IntoPattern<C: AhoChar> {
    /// Collects this pattern into a symbol buffer.
    fn collect_pattern(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoPattern<char> for &str {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &&str {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for String {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &String {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: AhoChar> IntoPattern<C> for &[C] {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AhoChar> IntoPattern<C> for Vec<C> {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AhoChar> IntoPattern<C> for &Vec<C> {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AhoChar, const N: usize> IntoPattern<C> for [C; N] {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AhoChar, const N: usize> IntoPattern<C> for &[C; N] {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// The prefix tree over a pattern set.
///
/// Every node is one prefix of some pattern. A freshly built trie has no failure
/// links; [`AutomatonBuilder`](super::builder::AutomatonBuilder) adds them.
#[derive(Clone, Debug)]
pub struct Trie<C: AhoChar> {
    nodes: NodeArena<C>,
}

impl<C: AhoChar> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AhoChar> Trie<C> {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        Trie {
            nodes: NodeArena::new(),
        }
    }

    /// Builds a trie from a pattern sequence.
    ///
    /// The node of pattern `i` gets `i` in its output set, so duplicate patterns
    /// share a node but keep their own indices.
    pub fn from_patterns<P: AsRef<[C]>>(patterns: &[P]) -> Self {
        let mut trie = Trie::new();
        for (i, pattern) in patterns.iter().enumerate() {
            let node = trie.insert(pattern.as_ref());
            trie.nodes[node].add_output(i);
        }
        trie
    }

    /// Inserts a pattern and returns the node for its last symbol.
    ///
    /// Missing edges are created along the way. The empty pattern is the root.
    pub fn insert(&mut self, pattern: &[C]) -> NodeId {
        let mut current = NodeId::ROOT;
        for &ch in pattern {
            current = match self.nodes[current].get(ch) {
                Some(child) => child,
                None => {
                    let depth = self.nodes[current].depth() + 1;
                    let child = self.nodes.alloc(depth);
                    self.nodes[current].insert(ch, child);
                    child
                }
            };
        }
        current
    }

    /// Returns the node for `pattern` if it is a prefix of some inserted pattern.
    pub fn lookup(&self, pattern: impl IntoPattern<C>) -> Option<NodeId> {
        self.nodes.walk(&pattern.collect_pattern())
    }

    /// Returns the root node id.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns the node with the given id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &AhoNode<C> {
        &self.nodes[id]
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn into_nodes(self) -> NodeArena<C> {
        self.nodes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_trie_is_root_only() {
        let trie = Trie::<char>::from_patterns::<Vec<char>>(&[]);
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.node(trie.root()).child_count(), 0);
        assert!(trie.node(trie.root()).output().is_empty());
    }

    #[test]
    fn insert_creates_one_node_per_new_symbol() {
        let mut trie = Trie::new();
        let test = trie.insert(&chars("TEST"));
        assert_eq!(trie.node_count(), 5);
        let tester = trie.insert(&chars("TESTER"));
        assert_eq!(trie.node_count(), 7);
        assert_eq!(trie.node(test).depth(), 4);
        assert_eq!(trie.node(tester).depth(), 6);

        // Re-inserting walks the existing path.
        assert_eq!(trie.insert(&chars("TEST")), test);
        assert_eq!(trie.node_count(), 7);
    }

    #[test]
    fn empty_pattern_is_root() {
        let mut trie = Trie::<char>::new();
        assert_eq!(trie.insert(&[]), NodeId::ROOT);
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn lookup_does_not_create_nodes() {
        let trie = Trie::from_patterns(&[chars("TEST"), chars("WTEST")]);
        let before = trie.node_count();
        assert!(trie.lookup("TES").is_some());
        assert!(trie.lookup("WT").is_some());
        assert_eq!(trie.lookup("TESTER"), None);
        assert_eq!(trie.lookup("X"), None);
        assert_eq!(trie.node_count(), before);
    }

    #[test]
    fn base_output_records_pattern_indices() {
        let patterns = [chars("ab"), chars("b"), chars("ab"), chars("")];
        let trie = Trie::from_patterns(&patterns);
        let ab = trie.lookup("ab").unwrap();
        assert_eq!(trie.node(ab).output(), &[0, 2]);
        assert_eq!(trie.node(trie.lookup("b").unwrap()).output(), &[1]);
        assert_eq!(trie.node(trie.root()).output(), &[3]);
        assert!(trie.node(trie.lookup("a").unwrap()).output().is_empty());
    }

    #[test]
    fn no_failure_links_before_build() {
        let trie = Trie::from_patterns(&[chars("ab"), chars("ba")]);
        for word in ["", "a", "ab", "b", "ba"] {
            let id = trie.lookup(word).unwrap();
            assert_eq!(trie.node(id).failure(), None);
        }
    }

    #[test]
    fn generic_trie_with_u8() {
        let trie = Trie::from_patterns(&[vec![1u8, 2, 3], vec![1, 2, 4]]);
        assert_eq!(trie.node_count(), 5);
        assert!(trie.lookup([1u8, 2]).is_some());
        assert_eq!(trie.lookup([2u8]), None);
    }
}
