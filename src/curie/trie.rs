//! Byte-level prefix trie for longest-prefix matching of IRIs
//!
//! Lookup walks the IRI's bytes once, so compressing an IRI costs
//! O(len(iri)) regardless of how many prefixes are registered.

/// A node in the trie.
///
/// Children are kept as a byte-sorted `Vec`; most nodes in an IRI prefix trie
/// have one or two children.
#[derive(Debug, Clone)]
struct TrieNode {
    /// Code of the prefix ending at this node, if any
    code: Option<usize>,
    children: Vec<(u8, usize)>,
}

impl TrieNode {
    fn empty() -> Self {
        TrieNode {
            code: None,
            children: Vec::new(),
        }
    }

    fn child(&self, byte: u8) -> Option<usize> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// Trie of expanded IRI prefixes, each tagged with a caller-chosen code.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    /// Flat node storage, root at index 0
    nodes: Vec<TrieNode>,
}

impl PrefixTrie {
    pub fn new() -> Self {
        PrefixTrie {
            nodes: vec![TrieNode::empty()],
        }
    }

    /// Register `prefix` under `code`. Re-inserting a prefix replaces its
    /// code. The empty prefix is ignored: it would match everything.
    pub fn insert(&mut self, prefix: &str, code: usize) {
        if prefix.is_empty() {
            return;
        }
        let mut node_idx = 0;
        for &byte in prefix.as_bytes() {
            node_idx = match self.nodes[node_idx].child(byte) {
                Some(child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::empty());
                    let node = &mut self.nodes[node_idx];
                    let pos = node.children.partition_point(|&(b, _)| b < byte);
                    node.children.insert(pos, (byte, new_idx));
                    new_idx
                }
            };
        }
        self.nodes[node_idx].code = Some(code);
    }

    /// The longest registered prefix of `iri`, as `(code, prefix_byte_length)`.
    pub fn longest_match(&self, iri: &str) -> Option<(usize, usize)> {
        let mut node_idx = 0;
        let mut best = None;

        for (i, &byte) in iri.as_bytes().iter().enumerate() {
            match self.nodes[node_idx].child(byte) {
                Some(child_idx) => {
                    node_idx = child_idx;
                    if let Some(code) = self.nodes[node_idx].code {
                        best = Some((code, i + 1));
                    }
                }
                None => break,
            }
        }

        best
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        let mut trie = PrefixTrie::new();
        trie.insert("http://purl.obolibrary.org/obo/", 0);
        trie.insert("http://purl.obolibrary.org/obo/HP_", 1);

        assert_eq!(
            trie.longest_match("http://purl.obolibrary.org/obo/HP_0000118"),
            Some((1, 34))
        );
        assert_eq!(
            trie.longest_match("http://purl.obolibrary.org/obo/GO_0008150"),
            Some((0, 31))
        );
    }

    #[test]
    fn test_no_match() {
        let mut trie = PrefixTrie::new();
        trie.insert("http://example.org/obo/HP_", 7);

        assert_eq!(trie.longest_match("http://example.org/ob/HP_0000001"), None);
        assert_eq!(trie.longest_match("http://example.org/obo/HP"), None);
        assert_eq!(trie.longest_match(""), None);
    }

    #[test]
    fn test_exact_prefix_and_empty_prefix() {
        let mut trie = PrefixTrie::new();
        trie.insert("", 0);
        trie.insert("is_a", 3);

        assert_eq!(trie.node_count(), 5);
        assert_eq!(trie.longest_match("is_a"), Some((3, 4)));
        assert_eq!(trie.longest_match("part_of"), None);
    }

    #[test]
    fn test_reinsert_replaces_code() {
        let mut trie = PrefixTrie::new();
        trie.insert("http://x/", 1);
        trie.insert("http://x/", 2);
        assert_eq!(trie.longest_match("http://x/y"), Some((2, 9)));
    }

    #[test]
    fn test_trie_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrefixTrie>();
    }
}
