//! CURIE <-> IRI prefix matcher

use super::config::{default_curie_map, CurieMap};
use super::error::{CurieError, CurieResult};
use super::trie::PrefixTrie;
use std::collections::HashMap;

/// Immutable bidirectional prefix matcher.
///
/// Expanding is a map lookup on the CURIE prefix; compressing finds the
/// longest registered expansion that is a literal prefix of the IRI.
#[derive(Debug, Clone)]
pub struct CurieUtil {
    /// Short prefix -> expansion; a prefix's position is its trie code
    prefix_to_iri: CurieMap,

    /// Expansion -> short prefix
    iri_to_prefix: HashMap<String, String>,

    trie: PrefixTrie,
}

impl CurieUtil {
    /// Build a matcher from a `short prefix -> expansion` map.
    ///
    /// Fails if two prefixes share an expansion.
    pub fn new(prefix_to_iri: CurieMap) -> CurieResult<Self> {
        let mut iri_to_prefix = HashMap::with_capacity(prefix_to_iri.len());
        let mut trie = PrefixTrie::new();

        for (code, (prefix, expansion)) in prefix_to_iri.iter().enumerate() {
            if let Some(first) = iri_to_prefix.insert(expansion.clone(), prefix.clone()) {
                return Err(CurieError::DuplicateExpansion {
                    expansion: expansion.clone(),
                    first,
                    second: prefix.clone(),
                });
            }
            trie.insert(expansion, code);
        }

        Ok(CurieUtil {
            prefix_to_iri,
            iri_to_prefix,
            trie,
        })
    }

    /// Only the given prefixes.
    pub fn just(prefix_to_iri: CurieMap) -> CurieResult<Self> {
        Self::new(prefix_to_iri)
    }

    /// The built-in prefixes.
    pub fn default_util() -> CurieResult<Self> {
        Self::new(default_curie_map())
    }

    /// The built-in prefixes overlaid with `extra`; entries in `extra` win.
    ///
    /// A built-in prefix whose expansion is claimed by a prefix in `extra` is
    /// dropped.
    pub fn with_defaults_and(extra: CurieMap) -> CurieResult<Self> {
        let mut merged = default_curie_map();
        merged.retain(|prefix, expansion| {
            extra.contains_key(prefix) || !extra.values().any(|e| e == expansion)
        });
        merged.extend(extra);
        Self::new(merged)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefix_to_iri.contains_key(prefix)
    }

    /// Expansion registered for a short prefix, e.g. `HP` ->
    /// `http://purl.obolibrary.org/obo/HP_`.
    pub fn get_expansion(&self, prefix: &str) -> Option<&str> {
        self.prefix_to_iri.get(prefix).map(String::as_str)
    }

    /// Short prefix registered for an exact expansion.
    pub fn prefix_for_expansion(&self, expansion: &str) -> Option<&str> {
        self.iri_to_prefix.get(expansion).map(String::as_str)
    }

    /// Expand a CURIE such as `HP:0000118` to its IRI.
    ///
    /// Splits on the first `:`. `None` when there is no separator or the
    /// prefix is unmapped.
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.get_expansion(prefix)
            .map(|expansion| format!("{}{}", expansion, local))
    }

    /// Compress an IRI to a CURIE using the longest matching expansion.
    pub fn compress(&self, iri: &str) -> Option<String> {
        let (code, len) = self.trie.longest_match(iri)?;
        let (prefix, _) = self.prefix_to_iri.get_index(code)?;
        Some(format!("{}:{}", prefix, &iri[len..]))
    }

    /// Alias of [`expand`](Self::expand).
    pub fn get_iri(&self, curie: &str) -> Option<String> {
        self.expand(curie)
    }

    /// Alias of [`compress`](Self::compress).
    pub fn get_curie(&self, iri: &str) -> Option<String> {
        self.compress(iri)
    }

    /// All mappings, in insertion order.
    pub fn prefix_to_iri(&self) -> &CurieMap {
        &self.prefix_to_iri
    }

    pub fn len(&self) -> usize {
        self.prefix_to_iri.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix_to_iri.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> CurieMap {
        entries
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_compress() {
        let util = CurieUtil::new(map(&[("HP", "http://example.org/obo/HP_")])).unwrap();

        assert_eq!(
            util.compress("http://example.org/obo/HP_0000001"),
            Some("HP:0000001".to_string())
        );
        assert_eq!(util.compress("http://example.org/ob/HP_0000001"), None);
    }

    #[test]
    fn test_expand() {
        let util = CurieUtil::new(map(&[("HP", "http://example.org/obo/HP_")])).unwrap();

        assert_eq!(
            util.expand("HP:0000001"),
            Some("http://example.org/obo/HP_0000001".to_string())
        );
        assert_eq!(util.expand("GO:0008150"), None);
        assert_eq!(util.expand("is_a"), None);
        // only the first separator splits
        assert_eq!(
            util.expand("HP:a:b"),
            Some("http://example.org/obo/HP_a:b".to_string())
        );
    }

    #[test]
    fn test_duplicate_expansion_is_rejected() {
        let result = CurieUtil::new(map(&[
            ("HP", "http://example.org/HP_"),
            ("HPO", "http://example.org/HP_"),
        ]));

        match result {
            Err(CurieError::DuplicateExpansion { first, second, .. }) => {
                assert_eq!(first, "HP");
                assert_eq!(second, "HPO");
            }
            other => panic!("expected duplicate expansion error, got {:?}", other),
        }
    }

    #[test]
    fn test_user_entries_override_defaults() {
        let util = CurieUtil::with_defaults_and(map(&[
            ("HP", "http://example.org/HP_"),
            ("HPO", "http://purl.obolibrary.org/obo/HP_"),
        ]))
        .unwrap();

        assert_eq!(util.get_expansion("HP"), Some("http://example.org/HP_"));
        assert_eq!(
            util.compress("http://purl.obolibrary.org/obo/HP_0000118"),
            Some("HPO:0000118".to_string())
        );
        assert!(util.has_prefix("GO"));
    }

    #[test]
    fn test_prefix_for_expansion() {
        let util = CurieUtil::default_util().unwrap();
        assert_eq!(
            util.prefix_for_expansion("http://purl.obolibrary.org/obo/GO_"),
            Some("GO")
        );
        assert_eq!(util.prefix_for_expansion("http://purl.obolibrary.org/obo/GO"), None);
    }

    #[test]
    fn test_curie_util_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CurieUtil>();
    }
}
