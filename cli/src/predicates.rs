//! Relation shorthands for `--predicates`

use ristretto::{CurieUtil, Node};
use std::collections::HashSet;

const IS_A: &str = "is_a";
const PART_OF: &str = "BFO:0000050";
const HAS_PART: &str = "BFO:0000051";
const OCCURS_IN: &str = "BFO:0000066";
const DEVELOPS_FROM: &str = "RO:0002202";
const ENABLES: &str = "RO:0002327";
const ENABLED_BY: &str = "RO:0002333";
const HAS_DIRECT_INPUT: &str = "RO:0002400";
const HAS_INPUT: &str = "RO:0002233";
const HAS_OUTPUT: &str = "RO:0002234";
const REGULATES: &str = "RO:0002211";
const NEGATIVELY_REGULATES: &str = "RO:0002212";
const POSITIVELY_REGULATES: &str = "RO:0002213";
const RDF_TYPE: &str = "rdf:type";
const EQUIVALENT_CLASS: &str = "owl:equivalentClass";
const DISJOINT_WITH: &str = "owl:disjointWith";
const RDFS_DOMAIN: &str = "rdfs:domain";
const RDFS_RANGE: &str = "rdfs:range";

/// Relation identifiers a shorthand stands for. Anything that is not a
/// shorthand is taken literally.
pub fn expand_shorthand(shorthand: &str) -> Vec<&str> {
    match shorthand {
        "i" => vec![IS_A],
        "p" => vec![PART_OF],
        "h" => vec![HAS_PART],
        "o" => vec![OCCURS_IN],
        "d" => vec![DEVELOPS_FROM],
        "en" => vec![ENABLES, ENABLED_BY],
        "io" => vec![HAS_INPUT, HAS_OUTPUT, HAS_DIRECT_INPUT],
        "r" => vec![REGULATES, NEGATIVELY_REGULATES, POSITIVELY_REGULATES],
        "t" => vec![RDF_TYPE],
        "e" => vec![EQUIVALENT_CLASS],
        "owl" => vec![IS_A, RDF_TYPE, EQUIVALENT_CLASS, DISJOINT_WITH, RDFS_DOMAIN, RDFS_RANGE],
        other => vec![other],
    }
}

/// Accepts edges whose relation is one of a set of relation identifiers.
/// An empty filter accepts everything.
#[derive(Debug, Default)]
pub struct RelationFilter {
    ids: HashSet<String>,
}

impl RelationFilter {
    /// Resolve shorthands, then expand CURIEs to IRIs where the prefix is
    /// known. Bare tokens such as `is_a` have no IRI and stay as they are.
    pub fn new(predicates: &[String], curies: &CurieUtil) -> Self {
        let ids = predicates
            .iter()
            .flat_map(|p| expand_shorthand(p))
            .map(|id| curies.expand(id).unwrap_or_else(|| id.to_string()))
            .collect();
        RelationFilter { ids }
    }

    pub fn accepts(&self, relation: &Node) -> bool {
        self.ids.is_empty() || self.ids.contains(relation.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ristretto::CurieMap;

    fn curies() -> CurieUtil {
        let mut map = CurieMap::new();
        map.insert("BFO".to_string(), "http://purl.obolibrary.org/obo/BFO_".to_string());
        map.insert("RO".to_string(), "http://purl.obolibrary.org/obo/RO_".to_string());
        CurieUtil::just(map).unwrap()
    }

    #[test]
    fn test_expand_shorthand() {
        assert_eq!(expand_shorthand("i"), vec!["is_a"]);
        assert_eq!(expand_shorthand("en"), vec!["RO:0002327", "RO:0002333"]);
        assert_eq!(expand_shorthand("owl").len(), 6);
        assert_eq!(expand_shorthand("subPropertyOf"), vec!["subPropertyOf"]);
    }

    #[test]
    fn test_filter_expands_to_iris() {
        let filter = RelationFilter::new(&["p".to_string(), "i".to_string()], &curies());

        assert!(filter.accepts(&Node::primitive("is_a")));
        assert!(filter.accepts(&Node::new("http://purl.obolibrary.org/obo/BFO_0000050", "part of")));
        assert!(!filter.accepts(&Node::new("http://purl.obolibrary.org/obo/BFO_0000051", "has part")));
    }

    #[test]
    fn test_empty_filter_accepts_all() {
        let filter = RelationFilter::new(&[], &curies());
        assert!(filter.accepts(&Node::primitive("anything")));
    }
}
