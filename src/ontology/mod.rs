//! Ontology navigation
//!
//! - [`Ontology`]: an immutable dual-index graph, children and parents both O(1)
//! - Ancestor/descendant closure, path existence and siblings
//! - [`NaiveLcaFinder`]: lowest common ancestors over any [`DirectedValueGraph`](crate::graph::DirectedValueGraph)

pub mod closure;
pub mod lca;
pub mod store;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

pub use lca::NaiveLcaFinder;
pub use store::{Ontology, OntologyBuilder};

/// Insertion-ordered set of terms borrowed from a graph.
pub type NodeSet<'a, N> = IndexSet<&'a N, FxBuildHasher>;
