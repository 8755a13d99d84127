//! Core type definitions for ontology graphs

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ontology term: an identifier (usually a full IRI) and its label.
///
/// Two nodes are the same vertex only if both the identifier and the label
/// match. Ordering is by identifier first, then by label, and fixes the
/// index order of every graph built from these nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    id: String,
    label: String,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
        }
    }

    /// A node whose identifier doubles as its label, e.g. the bare relation
    /// token `is_a`.
    pub fn primitive(id: impl Into<String>) -> Self {
        let id = id.into();
        Node {
            label: id.clone(),
            id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ! {}", self.id, self.label)
    }
}

impl<I: Into<String>, L: Into<String>> From<(I, L)> for Node {
    fn from((id, label): (I, L)) -> Self {
        Node::new(id, label)
    }
}
