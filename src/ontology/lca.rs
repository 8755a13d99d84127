//! Lowest common ancestors in directed acyclic graphs
//!
//! Let G = (V, E) be a DAG and x, y ∈ V. Let G(x, y) be the subgraph induced
//! by the common ancestors of x and y. The lowest common ancestors of x and
//! y are the nodes of G(x, y) with no child inside G(x, y) (Bender et al.,
//! "Lowest common ancestors in trees and directed acyclic graphs",
//! J. Algorithms 57(2), 2005).
//!
//! Both searches here only ever look up, through
//! [`DirectedValueGraph::predecessors`].

use super::NodeSet;
use crate::graph::{DirectedValueGraph, GraphResult};
use std::collections::VecDeque;
use std::hash::Hash;

/// Naive LCA search. No preprocessing; each query is O(|V|) in time and space.
pub struct NaiveLcaFinder<'g, G> {
    graph: &'g G,
}

impl<'g, G> NaiveLcaFinder<'g, G>
where
    G: DirectedValueGraph,
    G::Node: Hash + Eq,
{
    pub fn new(graph: &'g G) -> Self {
        NaiveLcaFinder { graph }
    }

    /// A common ancestor of `a` and `b`, found by growing both ancestor
    /// frontiers one level per round until they meet.
    ///
    /// Each round checks, in order: the a-frontier against everything seen
    /// from b, the b-frontier against everything seen from a, then the two
    /// frontiers against each other. The first hit wins; among several
    /// candidates the earliest-discovered one on the seen side is returned.
    /// Returns `a` when `a == b`, and `None` if the frontiers run out without
    /// meeting.
    ///
    /// On DAGs where the two ancestor trees have very different depths the
    /// result is *a* common ancestor but not necessarily a lowest one; use
    /// [`find_lca_set`](Self::find_lca_set) when that matters.
    pub fn find_lca(&self, a: &G::Node, b: &G::Node) -> GraphResult<Option<&'g G::Node>> {
        let a = self.graph.resolve(a)?;
        let b = self.graph.resolve(b)?;
        if a == b {
            return Ok(Some(a));
        }

        let mut a_set: NodeSet<'g, G::Node> = NodeSet::default();
        let mut b_set: NodeSet<'g, G::Node> = NodeSet::default();
        a_set.insert(a);
        b_set.insert(b);
        let mut a_seen: NodeSet<'g, G::Node> = NodeSet::default();
        let mut b_seen: NodeSet<'g, G::Node> = NodeSet::default();

        loop {
            if a_set.is_empty() && b_set.is_empty() {
                return Ok(None);
            }
            if let Some(lca) = overlapping_member(&a_set, &b_seen) {
                return Ok(Some(lca));
            }
            if let Some(lca) = overlapping_member(&b_set, &a_seen) {
                return Ok(Some(lca));
            }
            if let Some(lca) = overlapping_member(&a_set, &b_set) {
                return Ok(Some(lca));
            }

            a_seen.extend(a_set.iter().copied());
            b_seen.extend(b_set.iter().copied());

            // dropping already-seen nodes also stops cycles from looping forever
            a_set = self.all_parents(&a_set)?;
            a_set.retain(|n| !a_seen.contains(n));
            b_set = self.all_parents(&b_set)?;
            b_set.retain(|n| !b_seen.contains(n));
        }
    }

    /// Every lowest common ancestor of `a` and `b`.
    ///
    /// Collects all ancestors of each node (themselves included) with two
    /// interleaved breadth-first searches, intersects them, then drops every
    /// common ancestor that is a parent of another common ancestor. More than
    /// one node remains when the DAG has several incomparable lowest common
    /// ancestors; the set is empty when there is no common ancestor.
    pub fn find_lca_set(&self, a: &G::Node, b: &G::Node) -> GraphResult<NodeSet<'g, G::Node>> {
        let a = self.graph.resolve(a)?;
        let b = self.graph.resolve(b)?;

        let [from_a, from_b] = self.double_bfs(a, b)?;

        // intersect into the smaller set
        let mut common = if from_a.len() < from_b.len() {
            let mut set = from_a;
            set.retain(|n| from_b.contains(n));
            set
        } else {
            let mut set = from_b;
            set.retain(|n| from_a.contains(n));
            set
        };

        let mut non_lowest: NodeSet<'g, G::Node> = NodeSet::default();
        for &node in &common {
            for parent in self.graph.predecessors(node)? {
                if parent != node && common.contains(parent) {
                    non_lowest.insert(parent);
                }
            }
        }
        common.retain(|n| !non_lowest.contains(n));
        Ok(common)
    }

    /// Simultaneous bottom-up BFS from `a` and `b`, recording every node
    /// visited from each side. A node visited from both sides is not expanded
    /// further: its ancestors cannot be lowest common ancestors.
    fn double_bfs(
        &self,
        a: &'g G::Node,
        b: &'g G::Node,
    ) -> GraphResult<[NodeSet<'g, G::Node>; 2]> {
        let mut queues: [VecDeque<&'g G::Node>; 2] = [VecDeque::from([a]), VecDeque::from([b])];
        let mut visited: [NodeSet<'g, G::Node>; 2] = [NodeSet::default(), NodeSet::default()];
        visited[0].insert(a);
        visited[1].insert(b);

        let mut side = 0;
        while !queues[0].is_empty() || !queues[1].is_empty() {
            if let Some(node) = queues[side].pop_front() {
                if !visited[0].contains(node) || !visited[1].contains(node) {
                    for parent in self.graph.predecessors(node)? {
                        if visited[side].insert(parent) {
                            queues[side].push_back(parent);
                        }
                    }
                }
            }
            side ^= 1;
        }

        Ok(visited)
    }

    /// Parents of every node in the set, in discovery order.
    fn all_parents(&self, nodes: &NodeSet<'g, G::Node>) -> GraphResult<NodeSet<'g, G::Node>> {
        let mut parents = NodeSet::default();
        for &node in nodes {
            parents.extend(self.graph.predecessors(node)?);
        }
        Ok(parents)
    }
}

/// The first element of `ordered` that is also in `other`.
fn overlapping_member<'a, N: Hash + Eq>(
    other: &NodeSet<'a, N>,
    ordered: &NodeSet<'a, N>,
) -> Option<&'a N> {
    ordered.iter().copied().find(|n| other.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::Ontology;

    /// Two incomparable common ancestors: c and d are both parents of x and y.
    fn criss_cross() -> Ontology<&'static str, &'static str> {
        let mut builder = Ontology::builder();
        builder
            .add_axiom("c", "is_a", "root")
            .add_axiom("d", "is_a", "root")
            .add_axiom("x", "is_a", "c")
            .add_axiom("x", "is_a", "d")
            .add_axiom("y", "is_a", "c")
            .add_axiom("y", "is_a", "d");
        builder.build()
    }

    #[test]
    fn test_same_node() {
        let graph = criss_cross();
        let finder = NaiveLcaFinder::new(&graph);
        assert_eq!(finder.find_lca(&"x", &"x"), Ok(Some(&"x")));
    }

    #[test]
    fn test_tie_break_is_earliest_discovered() {
        let graph = criss_cross();
        let finder = NaiveLcaFinder::new(&graph);
        // parents of x are discovered as [c, d]
        assert_eq!(finder.find_lca(&"x", &"y"), Ok(Some(&"c")));
    }

    #[test]
    fn test_lca_set_with_multiple_lowest() {
        let graph = criss_cross();
        let finder = NaiveLcaFinder::new(&graph);

        let lcas = finder.find_lca_set(&"x", &"y").unwrap();
        assert_eq!(lcas.len(), 2);
        assert!(lcas.contains(&"c"));
        assert!(lcas.contains(&"d"));
        assert!(!lcas.contains(&"root"));
    }

    #[test]
    fn test_no_common_ancestor() {
        let mut builder = Ontology::builder();
        builder.add_axiom("a", "is_a", "r1").add_axiom("b", "is_a", "r2");
        let graph = builder.build();
        let finder = NaiveLcaFinder::new(&graph);

        assert_eq!(finder.find_lca(&"a", &"b"), Ok(None));
        assert!(finder.find_lca_set(&"a", &"b").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_nodes() {
        let graph = criss_cross();
        let finder = NaiveLcaFinder::new(&graph);

        assert!(finder.find_lca(&"x", &"nope").is_err());
        assert!(finder.find_lca(&"nope", &"x").is_err());
        assert!(finder.find_lca_set(&"nope", &"x").is_err());
    }

    #[test]
    fn test_ancestor_of_the_other() {
        let graph = criss_cross();
        let finder = NaiveLcaFinder::new(&graph);

        assert_eq!(finder.find_lca(&"x", &"c"), Ok(Some(&"c")));
        let lcas: Vec<_> = finder.find_lca_set(&"x", &"c").unwrap().into_iter().collect();
        assert_eq!(lcas, vec![&"c"]);
    }
}
