//! Capability trait for read-only directed graphs with valued edges
//!
//! Algorithms such as the LCA finder depend on this trait rather than on a
//! concrete graph type.

use super::csr::Neighbors;
use super::error::GraphResult;

/// The read operations an ontology-navigation algorithm may rely on.
///
/// "Successors" look down (towards children), "predecessors" look up
/// (towards parents). Every operation taking a node reports
/// [`GraphError::NodeNotFound`](super::GraphError::NodeNotFound) for nodes
/// outside the graph.
pub trait DirectedValueGraph {
    type Node;
    type Value;

    /// The graph's own copy of `node`, so results can borrow from the graph.
    fn resolve(&self, node: &Self::Node) -> GraphResult<&Self::Node>;

    fn successors(&self, node: &Self::Node) -> GraphResult<Neighbors<'_, Self::Node>>;

    fn predecessors(&self, node: &Self::Node) -> GraphResult<Neighbors<'_, Self::Node>>;

    fn out_degree(&self, node: &Self::Node) -> GraphResult<usize> {
        self.successors(node).map(|n| n.len())
    }

    fn in_degree(&self, node: &Self::Node) -> GraphResult<usize> {
        self.predecessors(node).map(|n| n.len())
    }

    /// Value of the first stored edge from `node_u` down to `node_v`.
    fn value_of_edge(&self, node_u: &Self::Node, node_v: &Self::Node) -> Option<&Self::Value>;

    fn contains_node(&self, node: &Self::Node) -> bool {
        self.resolve(node).is_ok()
    }
}
