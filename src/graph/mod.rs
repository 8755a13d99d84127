//! Graph storage
//!
//! This module implements the storage layer for ontology graphs:
//! - Ontology terms as (identifier, label) nodes
//! - Directed, valued edges with parallel edges and self-loops allowed
//! - An immutable Compressed Sparse Row adjacency store built once from an edge set
//! - The capability trait graph algorithms are written against

pub mod csr;
pub mod edge;
pub mod error;
pub mod traits;
pub mod types;

// Re-export main types
pub use csr::{CsrGraph, CsrGraphBuilder, NeighborIter, Neighbors, NodeIndex};
pub use edge::{EdgeList, ValueEdge};
pub use error::{GraphError, GraphResult};
pub use traits::DirectedValueGraph;
pub use types::Node;
