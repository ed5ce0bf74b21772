use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use smallvec::SmallVec;
use thiserror::Error;

use super::automaton::{follow, Automaton};
use super::char_trait::AhoChar;
use super::node_arena::{NodeArena, NodeId};
use super::trie::{IntoPattern, Trie};

/// Turns a [`Trie`] into an [`Automaton`] by computing failure links and
/// closing output sets.
///
/// Nodes are visited in level order: the failure link of a node is computed
/// from the failure link of its parent, which must already be final.
pub struct AutomatonBuilder<C: AhoChar> {
    nodes: NodeArena<C>,
    patterns: Vec<Vec<C>>,
}

impl<C: AhoChar> AutomatonBuilder<C> {
    /// Creates a builder from a trie and the patterns it was built from.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::PatternIndex`] if an output set of the trie names a
    /// pattern index outside of `patterns`, as happens when the trie was not
    /// built by [`Trie::from_patterns`] from the same list.
    pub fn new(trie: Trie<C>, patterns: Vec<Vec<C>>) -> Result<Self, BuildError> {
        let nodes = trie.into_nodes();
        let pattern_count = patterns.len();
        if let Some(&index) = nodes
            .iter()
            .flat_map(|node| node.output())
            .find(|&&index| index >= pattern_count)
        {
            return Err(BuildError::PatternIndex {
                index,
                pattern_count,
            });
        }
        Ok(AutomatonBuilder { nodes, patterns })
    }

    /// Computes failure links and closed output sets for every node.
    pub fn build(mut self) -> Automaton<C> {
        let mut queue = VecDeque::new();

        let root_children: SmallVec<[NodeId; 8]> = self.nodes[NodeId::ROOT]
            .children()
            .map(|(_, child)| child)
            .collect();
        for child in root_children {
            self.link(child, NodeId::ROOT);
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let parent_failure = self.nodes[parent]
                .failure()
                .expect("queued nodes have their failure link set");
            let edges: SmallVec<[(C, NodeId); 4]> = self.nodes[parent].children().collect();
            for (ch, child) in edges {
                let failure = follow(&self.nodes, parent_failure, ch);
                self.link(child, failure);
                queue.push_back(child);
            }
        }

        debug!(
            "built automaton with {} states for {} patterns",
            self.nodes.len(),
            self.patterns.len()
        );
        Automaton::from_parts(self.nodes, self.patterns)
    }

    /// Sets the failure link of `node` and appends the failure target's
    /// (already closed) output to the node's own base output.
    fn link(&mut self, node: NodeId, failure: NodeId) {
        debug_assert!(self.nodes[failure].depth() < self.nodes[node].depth());
        trace!("failure {node:?} -> {failure:?}");
        let inherited: SmallVec<[usize; 4]> = SmallVec::from_slice(self.nodes[failure].output());
        let node = &mut self.nodes[node];
        node.set_failure(failure);
        node.extend_output(&inherited);
    }
}

/// Builds an automaton from a sequence of patterns.
///
/// Each pattern can be any type that implements [`IntoPattern`], including
/// `&str`, `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays. Pattern `i` of
/// the sequence is reported as pattern index `i`. Patterns may repeat, and may
/// be empty; an empty sequence gives an automaton that never matches.
///
/// # Examples
///
/// Building from strings:
///
/// ```
/// use libaho::aho::builder::build_automaton;
///
/// let ac = build_automaton(["ab", "babb", "bb"]);
/// let found: Vec<_> = ac
///     .scan("bababbaabb".chars())
///     .into_iter()
///     .map(|m| (m.pattern(), m.end()))
///     .collect();
/// assert_eq!(found, [(0, 2), (0, 4), (1, 5), (2, 5), (0, 8), (2, 9)]);
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libaho::aho::builder::build_automaton;
///
/// let ac = build_automaton([vec![1u8, 2], vec![2, 3]]);
/// assert_eq!(ac.count_matches([1u8, 2, 3, 1, 2]), 3);
/// ```
pub fn build_automaton<C, P>(patterns: impl IntoIterator<Item = P>) -> Automaton<C>
where
    C: AhoChar,
    P: IntoPattern<C>,
{
    let patterns: Vec<Vec<C>> = patterns
        .into_iter()
        .map(|p| p.collect_pattern().into_vec())
        .collect();
    let nodes = Trie::from_patterns(&patterns).into_nodes();
    AutomatonBuilder { nodes, patterns }.build()
}

/// Errors that can occur when pairing a trie with its patterns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The trie reports a pattern index that has no pattern.
    #[error("trie outputs pattern {index} but only {pattern_count} patterns were given")]
    PatternIndex {
        /// The offending pattern index.
        index: usize,
        /// Number of patterns passed to the builder.
        pattern_count: usize,
    },
}

/// Errors that can occur when reading a pattern file.
#[derive(Debug, Error)]
pub enum PatternFileError {
    /// The file could not be opened.
    #[error("cannot open pattern file {}: {source}", path.display())]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A line could not be read, e.g. because it is not valid UTF-8.
    #[error("cannot read pattern on line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Reads patterns from a line-oriented source, one pattern per line.
///
/// Trailing whitespace is removed. Empty lines and lines starting with '#'
/// are skipped.
pub fn read_patterns<R: BufRead>(mut reader: R) -> Result<Vec<String>, PatternFileError> {
    let mut patterns = Vec::new();
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        line += 1;
        match reader.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => return Err(PatternFileError::Read { line, source }),
        }
        let pattern = buf.trim_end();
        if !pattern.is_empty() && !is_comment(pattern) {
            patterns.push(pattern.to_string());
        }
        buf.clear();
    }
    Ok(patterns)
}

/// Builds an automaton from a pattern file, see [`read_patterns`] for the format.
///
/// # Examples
///
/// ```no_run
/// use libaho::aho::builder::build_automaton_from_file;
///
/// let ac = build_automaton_from_file("patterns.txt").unwrap();
/// ```
pub fn build_automaton_from_file(
    path: impl AsRef<Path>,
) -> Result<Automaton<char>, PatternFileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PatternFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = read_patterns(BufReader::new(file))?;
    debug!("read {} patterns from {}", patterns.len(), path.display());
    Ok(build_automaton(patterns))
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use hashbrown::HashMap;
    use test_log::test;

    use super::*;

    fn label(ac: &Automaton<char>, id: NodeId) -> String {
        ac.labels()[id.index()].iter().collect()
    }

    #[test]
    fn failure_links_of_motivating_example() {
        let ac = build_automaton(["ab", "babb", "bb"]);
        let expected = [
            ("a", ""),
            ("b", ""),
            ("bb", "b"),
            ("ba", "a"),
            ("ab", "b"),
            ("bab", "ab"),
            ("babb", "bb"),
        ];
        for (from, to) in expected {
            let id = ac.lookup(from).unwrap();
            let failure = ac.failure(id).unwrap();
            assert_eq!(label(&ac, failure), to, "failure of {from}");
        }
        assert_eq!(ac.failure(ac.root()), None);
    }

    #[test]
    fn depth_one_nodes_fail_to_root() {
        let ac = build_automaton(["xyz", "yz", "z", "q"]);
        for (_, child) in ac.node(ac.root()).children() {
            assert_eq!(ac.failure(child), Some(ac.root()));
        }
    }

    #[test]
    fn failure_is_longest_proper_suffix_in_trie() {
        let patterns = ["abcab", "bcabd", "cab", "ab", "b"];
        let ac = build_automaton(patterns);
        let labels = ac.labels();
        let by_label: HashMap<&[char], NodeId> = (0..ac.state_count())
            .filter_map(|i| {
                let id = ac.lookup(labels[i].as_slice())?;
                Some((labels[i].as_slice(), id))
            })
            .collect();
        assert_eq!(by_label.len(), ac.state_count());

        for (&prefix, &id) in &by_label {
            if prefix.is_empty() {
                continue;
            }
            let longest = (1..=prefix.len())
                .map(|skip| &prefix[skip..])
                .find(|suffix| by_label.contains_key(suffix))
                .unwrap_or(&[]);
            let failure = ac.failure(id).unwrap();
            assert_eq!(labels[failure.index()].as_slice(), longest);
            assert!(ac.node(failure).depth() < ac.node(id).depth());
        }
    }

    #[test]
    fn outputs_are_closed_over_failure_links() {
        let patterns = ["he", "she", "his", "hers", "e", "he"];
        let ac = build_automaton(patterns);
        let labels = ac.labels();
        for i in 0..ac.state_count() {
            let id = ac.lookup(labels[i].as_slice()).unwrap();
            let mut expected: Vec<usize> = patterns
                .iter()
                .enumerate()
                .filter(|(_, p)| p.chars().eq(labels[i].iter().copied()))
                .map(|(index, _)| index)
                .collect();
            if let Some(failure) = ac.failure(id) {
                expected.extend_from_slice(ac.output(failure));
            }
            assert_eq!(ac.output(id), expected.as_slice());
        }
        let she = ac.lookup("she").unwrap();
        assert_eq!(ac.output(she), &[1, 0, 5, 4]);
    }

    #[test]
    fn builder_from_explicit_trie() {
        let patterns: Vec<Vec<char>> = ["ab", "bb"].iter().map(|p| p.chars().collect()).collect();
        let trie = Trie::from_patterns(&patterns);
        let states = trie.node_count();
        let ac = AutomatonBuilder::new(trie, patterns).unwrap().build();
        assert_eq!(ac.state_count(), states);
        assert_eq!(ac.pattern_count(), 2);
    }

    #[test]
    fn builder_rejects_trie_from_other_patterns() {
        let trie = Trie::from_patterns(&[['a', 'b']]);
        let err = AutomatonBuilder::new(trie, Vec::new()).err().unwrap();
        assert_eq!(
            err,
            BuildError::PatternIndex {
                index: 0,
                pattern_count: 0
            }
        );
        assert_eq!(
            err.to_string(),
            "trie outputs pattern 0 but only 0 patterns were given"
        );

        let trie = Trie::from_patterns(&[vec!['a'], vec!['b'], vec!['c']]);
        let res = AutomatonBuilder::new(trie, vec![vec!['a'], vec!['b']]);
        assert_eq!(
            res.err(),
            Some(BuildError::PatternIndex {
                index: 2,
                pattern_count: 2
            })
        );
    }

    #[test]
    fn builder_accepts_more_patterns_than_the_trie_uses() {
        let mut trie = Trie::new();
        let ab = trie.insert(&['a', 'b']);
        assert_eq!(trie.node(ab).depth(), 2);
        // A trie without base outputs never matches, whatever the patterns.
        let ac = AutomatonBuilder::new(trie, vec![vec!['a', 'b']])
            .unwrap()
            .build();
        assert!(ac.scan("ab".chars()).is_empty());
    }

    #[test]
    fn empty_pattern_set_is_root_only() {
        let ac = build_automaton::<u8, Vec<u8>>([]);
        assert_eq!(ac.state_count(), 1);
        assert_eq!(ac.pattern_count(), 0);
        assert_eq!(ac.failure(ac.root()), None);
        assert!(ac.output(ac.root()).is_empty());
    }

    #[test]
    fn read_patterns_skips_comments_and_blank_lines() {
        let input = "# header\nab\n\n  # indented comment\nbabb\r\nbb  \n";
        let patterns = read_patterns(input.as_bytes()).unwrap();
        assert_eq!(patterns, ["ab", "babb", "bb"]);
    }

    #[test]
    fn read_patterns_keeps_leading_whitespace() {
        let patterns = read_patterns(" a\nb".as_bytes()).unwrap();
        assert_eq!(patterns, [" a", "b"]);
    }

    #[test]
    fn read_patterns_reports_line_of_invalid_utf8() {
        let input: &[u8] = b"ab\n\xff\xfe\n";
        match read_patterns(input) {
            Err(PatternFileError::Read { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = build_automaton_from_file("/nonexistent/patterns.txt").unwrap_err();
        assert!(matches!(err, PatternFileError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/patterns.txt"));
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment(" REVERBERATE"));
    }
}
