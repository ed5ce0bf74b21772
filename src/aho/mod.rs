/// The finished automaton and its transition function.
pub mod automaton;
/// Automaton construction: failure links, output closure and pattern files.
pub mod builder;
/// Trait for types that can serve as alphabet symbols.
pub mod char_trait;
/// Compact child edges of a node.
pub mod children;
/// Automaton states.
pub mod node;
/// Index-based node storage.
pub mod node_arena;
/// Streaming matcher and match records.
pub mod scanner;
/// Prefix tree over the pattern set.
pub mod trie;

pub use automaton::Automaton;
pub use builder::{build_automaton, AutomatonBuilder, BuildError};
pub use char_trait::AhoChar;
pub use node::AhoNode;
pub use node_arena::NodeId;
pub use scanner::{Match, Scanner};
pub use trie::{IntoPattern, Trie};
