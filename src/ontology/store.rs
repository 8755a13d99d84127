//! Dual-index ontology
//!
//! An ontology is stored twice, as two [`CsrGraph`]s built from the same
//! axioms:
//! - the child index maps each object to the subjects asserting a relation
//!   onto it, so its successors are a term's children ("looking down")
//! - the parent index maps each subject to its objects, so its successors
//!   are a term's parents ("looking up")
//!
//! Both directions are therefore answered straight from CSR arrays, with no
//! edge reversal at query time.

use super::lca::NaiveLcaFinder;
use super::NodeSet;
use crate::graph::{
    CsrGraph, CsrGraphBuilder, DirectedValueGraph, GraphResult, Neighbors, ValueEdge,
};
use std::fmt;
use std::hash::Hash;
use tracing::info;

/// Immutable ontology graph with O(1) access to children and parents.
///
/// `N` is the term type, `V` the edge value (typically the relation term).
#[derive(Clone)]
pub struct Ontology<N, V> {
    /// Ontology identifier, e.g. `http://purl.obolibrary.org/obo/hp.json`
    id: String,

    /// object -> subjects
    child_index: CsrGraph<N, V>,

    /// subject -> objects
    parent_index: CsrGraph<N, V>,
}

impl<N, V> Ontology<N, V>
where
    N: Ord + Hash + Clone + fmt::Debug,
    V: Hash + Eq + Clone,
{
    pub fn builder() -> OntologyBuilder<N, V> {
        OntologyBuilder::new()
    }
}

impl<N, V> Ontology<N, V>
where
    N: Hash + Eq + fmt::Debug,
{
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node_count(&self) -> usize {
        self.child_index.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.child_index.edge_count()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.child_index.contains_node(node)
    }

    /// All terms, in index order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.child_index.nodes()
    }

    /// The downward store: object -> subjects.
    pub fn child_index(&self) -> &CsrGraph<N, V> {
        &self.child_index
    }

    /// The upward store: subject -> objects.
    pub fn parent_index(&self) -> &CsrGraph<N, V> {
        &self.parent_index
    }

    /// Children of a term.
    pub fn successors(&self, node: &N) -> GraphResult<Neighbors<'_, N>> {
        // looking down the tree
        self.child_index.successors(node)
    }

    /// Parents of a term.
    pub fn predecessors(&self, node: &N) -> GraphResult<Neighbors<'_, N>> {
        // looking up the tree
        self.parent_index.successors(node)
    }

    pub fn out_degree(&self, node: &N) -> GraphResult<usize> {
        self.child_index.out_degree(node)
    }

    pub fn in_degree(&self, node: &N) -> GraphResult<usize> {
        self.parent_index.out_degree(node)
    }

    /// A leaf has no children.
    pub fn is_leaf(&self, node: &N) -> GraphResult<bool> {
        Ok(self.out_degree(node)? == 0)
    }

    /// A root has no parents.
    pub fn is_root(&self, node: &N) -> GraphResult<bool> {
        Ok(self.in_degree(node)? == 0)
    }

    /// Every root term, in index order. Scans all nodes.
    pub fn root_nodes(&self) -> Vec<&N> {
        let index = &self.parent_index;
        (0..index.node_count())
            .filter(|&idx| index.successors_at(idx).is_empty())
            .filter_map(|idx| index.node_at(idx))
            .collect()
    }

    /// Every leaf term, in index order. Scans all nodes.
    pub fn leaf_nodes(&self) -> Vec<&N> {
        let index = &self.child_index;
        (0..index.node_count())
            .filter(|&idx| index.successors_at(idx).is_empty())
            .filter_map(|idx| index.node_at(idx))
            .collect()
    }

    /// Value of the first stored edge from `node_u` down to `node_v`, i.e.
    /// the predicate of the axiom `(node_v, predicate, node_u)`.
    ///
    /// `None` when either node is unknown or they are not connected.
    /// O(out_degree(node_u)).
    pub fn value_of_edge(&self, node_u: &N, node_v: &N) -> Option<&V> {
        self.child_index.value_of_edge(node_u, node_v)
    }

    /// Values of every edge from `node_u` down to `node_v`, in stored order.
    pub fn edge_values<'a>(&'a self, node_u: &N, node_v: &N) -> impl Iterator<Item = &'a V> + 'a {
        self.child_index.edge_values(node_u, node_v)
    }

    /// Whether `node_v` is a child of `node_u`.
    pub fn has_edge(&self, node_u: &N, node_v: &N) -> bool {
        self.child_index.has_edge_connecting(node_u, node_v)
    }

    /// Every downward edge `parent -[value]-> child`, grouped by parent.
    pub fn edges(&self) -> impl Iterator<Item = ValueEdge<&N, &V>> + '_ {
        self.child_index.edges()
    }

    /// A lowest common ancestor of `a` and `b`, see [`NaiveLcaFinder::find_lca`].
    pub fn lca(&self, a: &N, b: &N) -> GraphResult<Option<&N>> {
        NaiveLcaFinder::new(self).find_lca(a, b)
    }

    /// All lowest common ancestors of `a` and `b`, see [`NaiveLcaFinder::find_lca_set`].
    pub fn lca_set(&self, a: &N, b: &N) -> GraphResult<NodeSet<'_, N>> {
        NaiveLcaFinder::new(self).find_lca_set(a, b)
    }
}

impl<N, V> DirectedValueGraph for Ontology<N, V>
where
    N: Hash + Eq + fmt::Debug,
{
    type Node = N;
    type Value = V;

    fn resolve(&self, node: &N) -> GraphResult<&N> {
        self.child_index.resolve(node)
    }

    fn successors(&self, node: &N) -> GraphResult<Neighbors<'_, N>> {
        Ontology::successors(self, node)
    }

    fn predecessors(&self, node: &N) -> GraphResult<Neighbors<'_, N>> {
        Ontology::predecessors(self, node)
    }

    fn out_degree(&self, node: &N) -> GraphResult<usize> {
        Ontology::out_degree(self, node)
    }

    fn in_degree(&self, node: &N) -> GraphResult<usize> {
        Ontology::in_degree(self, node)
    }

    fn value_of_edge(&self, node_u: &N, node_v: &N) -> Option<&V> {
        Ontology::value_of_edge(self, node_u, node_v)
    }

    fn contains_node(&self, node: &N) -> bool {
        Ontology::contains_node(self, node)
    }
}

impl<N: fmt::Debug, V> fmt::Debug for Ontology<N, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ontology")
            .field("id", &self.id)
            .field("child_index", &self.child_index)
            .field("parent_index", &self.parent_index)
            .finish()
    }
}

/// Accumulates axioms for an [`Ontology`].
///
/// Single-owner; [`OntologyBuilder::build`] consumes it.
#[derive(Debug, Clone)]
pub struct OntologyBuilder<N, V> {
    id: String,
    child_index: CsrGraphBuilder<N, V>,
    parent_index: CsrGraphBuilder<N, V>,
}

impl<N, V> OntologyBuilder<N, V>
where
    N: Ord + Hash + Clone + fmt::Debug,
    V: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        OntologyBuilder {
            id: String::new(),
            child_index: CsrGraphBuilder::new(),
            parent_index: CsrGraphBuilder::new(),
        }
    }

    pub fn id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// Add the assertion `subject predicate object`, e.g. `IPA is_a Beer`.
    ///
    /// Axioms point up towards the root: `object` becomes a parent of
    /// `subject`.
    pub fn add_axiom(&mut self, subject: N, predicate: V, object: N) -> &mut Self {
        self.child_index
            .put_edge_value(object.clone(), subject.clone(), predicate.clone());
        self.parent_index.put_edge_value(subject, object, predicate);
        self
    }

    /// Add an already downward-pointing edge: `target` becomes a child of
    /// `source`.
    pub fn add_edge(&mut self, source: N, value: V, target: N) -> &mut Self {
        self.child_index
            .put_edge_value(source.clone(), target.clone(), value.clone());
        self.parent_index.put_edge_value(target, source, value);
        self
    }

    pub fn build(self) -> Ontology<N, V> {
        let child_index = self.child_index.build();
        let parent_index = self.parent_index.build();
        info!(
            "Built ontology '{}' with {} nodes and {} edges",
            self.id,
            child_index.node_count(),
            child_index.edge_count()
        );
        Ontology {
            id: self.id,
            child_index,
            parent_index,
        }
    }
}

impl<N, V> Default for OntologyBuilder<N, V>
where
    N: Ord + Hash + Clone + fmt::Debug,
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
