//! Builds an [`Ontology`] of [`Node`]s from OBO Graphs input
//!
//! Every edge `sub pred obj` becomes the axiom (subject, predicate, object),
//! with all three resolved to nodes:
//! - nodes are deduplicated by identifier, the first entry wins
//! - a predicate without a node entry becomes a node whose identifier and
//!   label are both the predicate token (`is_a`, `part_of`, `subPropertyOf`, ...)
//! - edges missing a part, or whose subject or object is not a known node,
//!   are skipped

use super::error::{LoadError, LoadResult};
use super::model::{Graph, GraphDocument, GraphEdge};
use crate::graph::Node;
use crate::ontology::Ontology;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Ontology built from OBO Graphs: terms and relations are both [`Node`]s.
pub type NodeOntology = Ontology<Node, Node>;

pub struct OntologyLoader;

impl OntologyLoader {
    /// Build an ontology from a node list and an edge list.
    pub fn from_parts<I, E>(id: impl Into<String>, nodes: I, edges: E) -> NodeOntology
    where
        I: IntoIterator<Item = Node>,
        E: IntoIterator<Item = GraphEdge>,
    {
        let mut by_id: FxHashMap<String, Node> = FxHashMap::default();
        for node in nodes {
            match by_id.entry(node.id().to_string()) {
                Entry::Occupied(existing) => {
                    warn!(
                        "Duplicate node '{}': keeping label '{}', ignoring '{}'",
                        node.id(),
                        existing.get().label(),
                        node.label()
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }
        }

        let mut builder = Ontology::builder();
        builder.id(id);
        let mut skipped = 0usize;

        for edge in edges {
            let (Some(sub), Some(pred), Some(obj)) = (edge.sub, edge.pred, edge.obj) else {
                skipped += 1;
                continue;
            };
            let predicate = by_id
                .entry(pred)
                .or_insert_with_key(|pred| Node::primitive(pred.as_str()))
                .clone();
            match (by_id.get(&sub), by_id.get(&obj)) {
                (Some(subject), Some(object)) => {
                    builder.add_axiom(subject.clone(), predicate, object.clone());
                }
                _ => {
                    debug!("Skipping edge with unknown endpoint: {} {} {}", sub, predicate.id(), obj);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {} incomplete or unresolvable edges", skipped);
        }
        builder.build()
    }

    /// Build an ontology from one OBO Graphs graph. Missing labels become "".
    pub fn from_graph(graph: Graph) -> NodeOntology {
        let nodes = graph
            .nodes
            .into_iter()
            .map(|node| Node::new(node.id, node.label.unwrap_or_default()));
        Self::from_parts(graph.id.unwrap_or_default(), nodes, graph.edges)
    }

    /// Build an ontology from the first graph of a document.
    pub fn from_document(document: GraphDocument) -> LoadResult<NodeOntology> {
        let graph = document
            .graphs
            .into_iter()
            .next()
            .ok_or(LoadError::NoGraphs)?;
        Ok(Self::from_graph(graph))
    }

    /// Parse an OBO Graphs JSON document and build its first graph.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<NodeOntology> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load an OBO Graphs JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> LoadResult<NodeOntology> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let ontology = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} terms and {} edges from {}",
            ontology.node_count(),
            ontology.edge_count(),
            path.display()
        );
        Ok(ontology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HP: &str = "http://purl.obolibrary.org/obo/HP_";

    fn hp(id: &str) -> String {
        format!("{}{}", HP, id)
    }

    #[test]
    fn test_predicate_nodes_are_synthesized() {
        let nodes = vec![
            Node::new(hp("0000001"), "All"),
            Node::new(hp("0000118"), "Phenotypic abnormality"),
        ];
        let edges = vec![GraphEdge::new(hp("0000118"), "is_a", hp("0000001"))];
        let ontology = OntologyLoader::from_parts("hp", nodes, edges);

        let all = Node::new(hp("0000001"), "All");
        let abnormality = Node::new(hp("0000118"), "Phenotypic abnormality");
        assert_eq!(ontology.id(), "hp");
        assert_eq!(ontology.node_count(), 2);
        assert_eq!(
            ontology.value_of_edge(&all, &abnormality),
            Some(&Node::primitive("is_a"))
        );
    }

    #[test]
    fn test_known_predicate_node_is_reused() {
        let nodes = vec![
            Node::new("A", "a"),
            Node::new("B", "b"),
            Node::new("http://purl.obolibrary.org/obo/BFO_0000050", "part of"),
        ];
        let edges = vec![GraphEdge::new("A", "http://purl.obolibrary.org/obo/BFO_0000050", "B")];
        let ontology = OntologyLoader::from_parts("", nodes, edges);

        let value = ontology
            .value_of_edge(&Node::new("B", "b"), &Node::new("A", "a"))
            .unwrap();
        assert_eq!(value.label(), "part of");
    }

    #[test]
    fn test_malformed_edges_are_skipped() {
        let nodes = vec![Node::new("A", "a"), Node::new("B", "b")];
        let edges = vec![
            GraphEdge::new("A", "is_a", "B"),
            GraphEdge::new("A", "is_a", "Z"),
            GraphEdge::new("Z", "is_a", "B"),
            GraphEdge {
                sub: Some("A".to_string()),
                pred: None,
                obj: Some("B".to_string()),
            },
        ];
        let ontology = OntologyLoader::from_parts("", nodes, edges);

        assert_eq!(ontology.node_count(), 2);
        assert_eq!(ontology.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_nodes_keep_first() {
        let nodes = vec![Node::new("A", "first"), Node::new("A", "second"), Node::new("B", "b")];
        let edges = vec![GraphEdge::new("A", "is_a", "B")];
        let ontology = OntologyLoader::from_parts("", nodes, edges);

        assert!(ontology.contains_node(&Node::new("A", "first")));
        assert!(!ontology.contains_node(&Node::new("A", "second")));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let result = OntologyLoader::from_reader(r#"{"graphs": []}"#.as_bytes());
        assert!(matches!(result, Err(LoadError::NoGraphs)));

        let result = OntologyLoader::from_reader("not json".as_bytes());
        assert!(matches!(result, Err(LoadError::Json(_))));
    }
}
