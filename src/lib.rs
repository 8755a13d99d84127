//! Ristretto
//!
//! A compact, immutable, in-memory index over ontology graphs, answering
//! "who are the parents/children/ancestors/descendants of this term" and
//! "what is the lowest common ancestor of these two terms" without pointer
//! chasing.
//!
//! # Architecture
//!
//! - [`graph`]: terms, valued edges, and the Compressed Sparse Row store
//! - [`ontology`]: the dual-index ontology (one CSR store per direction),
//!   closure queries and the LCA finder
//! - [`curie`]: CURIE <-> IRI conversion through a longest-prefix trie
//! - [`obographs`]: building an ontology from OBO Graphs JSON
//!
//! Everything is built once by a single owner and is read-only afterwards,
//! so built values can be shared between threads without locking.
//!
//! ## Example Usage
//!
//! ```rust
//! use ristretto::Ontology;
//!
//! let mut builder = Ontology::builder();
//! builder
//!     .add_axiom("IPA", "is_a", "Beer")
//!     .add_axiom("WestCoastIPA", "is_a", "IPA")
//!     .add_axiom("GooseIsland", "is_a", "WestCoastIPA")
//!     .add_axiom("TitanIPA", "is_a", "WestCoastIPA");
//! let ontology = builder.build();
//!
//! assert_eq!(ontology.root_nodes(), vec![&"Beer"]);
//! assert!(ontology.ancestors(&"TitanIPA").unwrap().contains(&"Beer"));
//! assert_eq!(ontology.lca(&"TitanIPA", &"GooseIsland").unwrap(), Some(&"WestCoastIPA"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod curie;
pub mod graph;
pub mod obographs;
pub mod ontology;

// Re-export main types for convenience
pub use graph::{
    CsrGraph, CsrGraphBuilder, DirectedValueGraph, GraphError, GraphResult, Neighbors, Node,
    ValueEdge,
};

pub use ontology::{NaiveLcaFinder, NodeSet, Ontology, OntologyBuilder};

pub use curie::{CurieError, CurieMap, CurieResult, CurieUtil, PrefixTrie};

pub use obographs::{GraphDocument, LoadError, LoadResult, NodeOntology, OntologyLoader};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
