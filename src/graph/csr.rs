//! Immutable directed multigraph in Compressed Sparse Row (CSR) layout
//!
//! Every node gets a dense index `0..node_count`, assigned in ascending
//! order of the nodes' natural ordering. Node `i`'s outgoing edges occupy
//! `offsets[i]..offsets[i + 1]` in the two parallel arrays `targets`
//! (dense indices of the target nodes) and `values`.
//!
//! Within one node's range edges are kept in insertion order, so looking up
//! the value of a specific edge is a linear scan of that range.

use super::edge::{EdgeList, ValueEdge};
use super::error::{GraphError, GraphResult};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Dense node index: position in the set is the node's index.
pub type NodeIndex<N> = IndexSet<N, FxBuildHasher>;

/// A read-only, index-addressed directed graph with valued edges.
#[derive(Clone)]
pub struct CsrGraph<N, V> {
    /// Node <-> dense index mapping, in index order
    nodes: NodeIndex<N>,

    /// Offsets into `targets` and `values`. Size = node_count + 1
    offsets: Vec<usize>,

    /// Contiguous array of target node indices
    targets: Vec<usize>,

    /// Edge values, aligned with `targets`
    values: Vec<V>,
}

impl<N, V> CsrGraph<N, V>
where
    N: Hash + Eq + fmt::Debug,
{
    /// Start building a graph.
    pub fn builder() -> CsrGraphBuilder<N, V>
    where
        N: Ord + Clone,
        V: Hash + Eq,
    {
        CsrGraphBuilder::new()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Dense index of a node.
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    /// Node stored at a dense index.
    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.nodes.get_index(index)
    }

    /// The graph's own copy of `node`.
    pub fn resolve(&self, node: &N) -> GraphResult<&N> {
        self.nodes
            .get(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// Targets of the node's outgoing edges, in insertion order.
    pub fn successors(&self, node: &N) -> GraphResult<Neighbors<'_, N>> {
        let idx = self.require_index(node)?;
        Ok(self.successors_at(idx))
    }

    /// Get the out-degree of a node
    pub fn out_degree(&self, node: &N) -> GraphResult<usize> {
        let idx = self.require_index(node)?;
        Ok(self.offsets[idx + 1] - self.offsets[idx])
    }

    pub fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.edge_values(node_u, node_v).next().is_some()
    }

    /// Value of the first stored `node_u -> node_v` edge.
    ///
    /// `None` when either node is unknown or there is no such edge. Scans
    /// `node_u`'s edge range linearly, O(out_degree(node_u)).
    pub fn value_of_edge(&self, node_u: &N, node_v: &N) -> Option<&V> {
        self.edge_values(node_u, node_v).next()
    }

    /// Values of every `node_u -> node_v` edge, in stored order.
    pub fn edge_values<'a>(&'a self, node_u: &N, node_v: &N) -> impl Iterator<Item = &'a V> + 'a {
        let range = match (self.index_of(node_u), self.index_of(node_v)) {
            (Some(u), Some(v)) => Some((self.offsets[u]..self.offsets[u + 1], v)),
            _ => None,
        };
        range.into_iter().flat_map(move |(range, v)| {
            range
                .filter(move |&i| self.targets[i] == v)
                .map(move |i| &self.values[i])
        })
    }

    /// All edges, grouped by source in index order.
    pub fn edges(&self) -> impl Iterator<Item = ValueEdge<&N, &V>> + '_ {
        (0..self.node_count()).flat_map(move |u| {
            let source = &self.nodes[u];
            (self.offsets[u]..self.offsets[u + 1]).map(move |i| {
                ValueEdge::new(source, &self.values[i], &self.nodes[self.targets[i]])
            })
        })
    }

    /// The offsets array, `node_count + 1` entries.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Edge values in storage order, aligned with the edge ranges of `offsets`.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub(crate) fn successors_at(&self, idx: usize) -> Neighbors<'_, N> {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        Neighbors {
            nodes: &self.nodes,
            targets: &self.targets[start..end],
        }
    }

    fn require_index(&self, node: &N) -> GraphResult<usize> {
        self.index_of(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }
}

impl<N: fmt::Debug, V> fmt::Debug for CsrGraph<N, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrGraph")
            .field("node_count", &self.nodes.len())
            .field("edge_count", &self.targets.len())
            .finish()
    }
}

/// A view over one node's outgoing edge targets.
///
/// Borrowed directly from the graph's arrays; iteration yields the target
/// nodes in insertion order. A target appears once per parallel edge.
pub struct Neighbors<'a, N> {
    nodes: &'a NodeIndex<N>,
    targets: &'a [usize],
}

impl<'a, N> Neighbors<'a, N> {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> NeighborIter<'a, N> {
        NeighborIter {
            nodes: self.nodes,
            inner: self.targets.iter(),
        }
    }

    pub fn contains(&self, node: &N) -> bool
    where
        N: Hash + Eq,
    {
        match self.nodes.get_index_of(node) {
            Some(idx) => self.targets.contains(&idx),
            None => false,
        }
    }
}

impl<N> Clone for Neighbors<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Neighbors<'_, N> {}

impl<N: fmt::Debug> fmt::Debug for Neighbors<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, N> IntoIterator for Neighbors<'a, N> {
    type Item = &'a N;
    type IntoIter = NeighborIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the targets of a [`Neighbors`] view.
pub struct NeighborIter<'a, N> {
    nodes: &'a NodeIndex<N>,
    inner: std::slice::Iter<'a, usize>,
}

impl<'a, N> Iterator for NeighborIter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.inner.next().map(move |&idx| &nodes[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N> ExactSizeIterator for NeighborIter<'_, N> {}

/// Mutable accumulation phase of a [`CsrGraph`].
///
/// Owned by a single caller; [`CsrGraphBuilder::build`] consumes it.
#[derive(Debug, Clone)]
pub struct CsrGraphBuilder<N, V> {
    /// Adjacency list per source node, sorted by node
    adjacency: BTreeMap<N, EdgeList<N, V>>,
}

impl<N, V> CsrGraphBuilder<N, V>
where
    N: Ord + Hash + Clone + fmt::Debug,
    V: Hash + Eq,
{
    pub fn new() -> Self {
        CsrGraphBuilder {
            adjacency: BTreeMap::new(),
        }
    }

    /// Add the edge `source -[value]-> target`.
    ///
    /// The target is registered as a node even if it never gets an outgoing
    /// edge of its own. Re-adding an identical edge has no effect.
    pub fn put_edge_value(&mut self, source: N, target: N, value: V) -> &mut Self {
        if !self.adjacency.contains_key(&target) {
            self.adjacency.insert(target.clone(), EdgeList::new());
        }
        self.adjacency
            .entry(source)
            .or_default()
            .push(target, value);
        self
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(EdgeList::len).sum()
    }

    /// Freeze the accumulated edges into CSR form.
    pub fn build(self) -> CsrGraph<N, V> {
        let edge_count = self.edge_count();
        let (nodes, lists): (Vec<N>, Vec<EdgeList<N, V>>) = self.adjacency.into_iter().unzip();
        let nodes: NodeIndex<N> = nodes.into_iter().collect();

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut targets = Vec::with_capacity(edge_count);
        let mut values = Vec::with_capacity(edge_count);

        offsets.push(0);
        for list in lists {
            // put_edge_value registers every target, so the lookup always hits
            for (target, value) in list {
                if let Some(target_idx) = nodes.get_index_of(&target) {
                    targets.push(target_idx);
                    values.push(value);
                }
            }
            offsets.push(targets.len());
        }

        debug!(
            "Built CSR graph with {} nodes and {} edges",
            nodes.len(),
            targets.len()
        );

        CsrGraph {
            nodes,
            offsets,
            targets,
            values,
        }
    }
}

impl<N, V> Default for CsrGraphBuilder<N, V>
where
    N: Ord + Hash + Clone + fmt::Debug,
    V: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
