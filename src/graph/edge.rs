//! Valued edges and the per-source edge list used while building a graph
//!
//! - A directed edge carries an opaque value (usually the relation node)
//! - Parallel edges between the same endpoints are kept when their values differ
//! - Self-loops are kept as-is

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

/// A directed edge `source -[value]-> target`.
///
/// Source, value and target together determine edge identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueEdge<N, V> {
    /// Source node (edge goes FROM this node)
    pub source: N,

    /// Edge value, e.g. the `is_a` relation
    pub value: V,

    /// Target node (edge goes TO this node)
    pub target: N,
}

impl<N, V> ValueEdge<N, V> {
    pub fn new(source: N, value: V, target: N) -> Self {
        ValueEdge {
            source,
            value,
            target,
        }
    }
}

/// Insertion-ordered multiset of `(target, value)` pairs for one source node.
///
/// The first occurrence of an edge fixes its position; re-adding an identical
/// `(target, value)` pair is a no-op. Two edges to the same target with
/// different values are both kept, in the order they were first seen.
#[derive(Debug, Clone)]
pub struct EdgeList<N, V> {
    edges: IndexSet<(N, V), FxBuildHasher>,
}

impl<N: Hash + Eq, V: Hash + Eq> EdgeList<N, V> {
    pub fn new() -> Self {
        EdgeList {
            edges: IndexSet::default(),
        }
    }

    /// Append an edge. Returns `false` if the identical edge was already present.
    pub fn push(&mut self, target: N, value: V) -> bool {
        self.edges.insert((target, value))
    }

    pub fn contains(&self, target: &N, value: &V) -> bool
    where
        N: Clone,
        V: Clone,
    {
        self.edges.contains(&(target.clone(), value.clone()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &V)> + '_ {
        self.edges.iter().map(|(target, value)| (target, value))
    }
}

impl<N: Hash + Eq, V: Hash + Eq> Default for EdgeList<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, V> IntoIterator for EdgeList<N, V> {
    type Item = (N, V);
    type IntoIter = indexmap::set::IntoIter<(N, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
