//! OBO Graphs input
//!
//! Reads OBO Graphs JSON (`hp.json`, `go.json`, ...) and turns its node and
//! edge lists into an [`Ontology`](crate::ontology::Ontology).

pub mod error;
pub mod loader;
pub mod model;

pub use error::{LoadError, LoadResult};
pub use loader::{NodeOntology, OntologyLoader};
pub use model::{Graph, GraphDocument, GraphEdge, GraphNode};
