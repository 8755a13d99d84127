//! Ancestor and descendant closure
//!
//! All traversals are iterative depth-first walks with a seen-set, so they
//! terminate on cyclic input. The start node is never part of its own
//! closure.

use super::{NodeSet, Ontology};
use crate::graph::{GraphResult, Neighbors};
use std::fmt;
use std::hash::Hash;

impl<N, V> Ontology<N, V>
where
    N: Hash + Eq + fmt::Debug,
{
    /// Every term reachable upwards from `node`, excluding `node` itself.
    pub fn ancestors(&self, node: &N) -> GraphResult<NodeSet<'_, N>> {
        let start = self.child_index().resolve(node)?;
        closure(start, |n| self.predecessors(n))
    }

    /// Every term reachable downwards from `node`, excluding `node` itself.
    pub fn descendants(&self, node: &N) -> GraphResult<NodeSet<'_, N>> {
        let start = self.child_index().resolve(node)?;
        if self.is_leaf(start)? {
            return Ok(NodeSet::default());
        }
        closure(start, |n| self.successors(n))
    }

    /// Whether `other` is an ancestor of `node`.
    ///
    /// Stops at the first match. `node` only counts as its own ancestor when
    /// a cycle leads back to it.
    pub fn is_ancestor_of(&self, node: &N, other: &N) -> GraphResult<bool> {
        let start = self.child_index().resolve(node)?;
        let target = self.child_index().resolve(other)?;
        reaches(start, target, |n| self.predecessors(n))
    }

    /// Whether `other` is a descendant of `node`.
    pub fn is_descendant_of(&self, node: &N, other: &N) -> GraphResult<bool> {
        self.path_exists(node, other)
    }

    /// Whether a non-empty downward path leads from `from` to `to`.
    pub fn path_exists(&self, from: &N, to: &N) -> GraphResult<bool> {
        let start = self.child_index().resolve(from)?;
        let target = self.child_index().resolve(to)?;
        reaches(start, target, |n| self.successors(n))
    }

    /// Other children of the term's parents, in discovery order.
    pub fn siblings(&self, node: &N) -> GraphResult<NodeSet<'_, N>> {
        let start = self.child_index().resolve(node)?;
        let mut siblings = NodeSet::default();
        for parent in self.predecessors(start)? {
            siblings.extend(self.successors(parent)?.iter().filter(|&n| n != start));
        }
        Ok(siblings)
    }
}

fn closure<'a, N, F>(start: &'a N, step: F) -> GraphResult<NodeSet<'a, N>>
where
    N: Hash + Eq,
    F: Fn(&'a N) -> GraphResult<Neighbors<'a, N>>,
{
    let mut seen = NodeSet::default();
    let mut stack: Vec<&'a N> = step(start)?.iter().collect();
    while let Some(current) = stack.pop() {
        if current == start || !seen.insert(current) {
            continue;
        }
        stack.extend(step(current)?);
    }
    Ok(seen)
}

fn reaches<'a, N, F>(start: &'a N, target: &'a N, step: F) -> GraphResult<bool>
where
    N: Hash + Eq,
    F: Fn(&'a N) -> GraphResult<Neighbors<'a, N>>,
{
    let mut seen = NodeSet::default();
    let mut stack: Vec<&'a N> = step(start)?.iter().collect();
    while let Some(current) = stack.pop() {
        if current == target {
            return Ok(true);
        }
        if seen.insert(current) {
            stack.extend(step(current)?);
        }
    }
    Ok(false)
}
