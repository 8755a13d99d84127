//! OBO Graphs JSON document model
//!
//! Only the parts needed to build an ontology are modelled; every other
//! field (`meta`, `type`, logical definitions, ...) is ignored on read.

use serde::{Deserialize, Serialize};

/// Top-level OBO Graphs document: `{"graphs": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

/// One ontology graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub nodes: Vec<GraphNode>,

    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// A term entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,

    /// Human readable label
    #[serde(default, rename = "lbl", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// An edge `sub pred obj`. Any part may be missing in malformed input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub pred: Option<String>,

    #[serde(default)]
    pub obj: Option<String>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        GraphNode {
            id: id.into(),
            label: Some(label.into()),
        }
    }
}

impl GraphEdge {
    pub fn new(sub: impl Into<String>, pred: impl Into<String>, obj: impl Into<String>) -> Self {
        GraphEdge {
            sub: Some(sub.into()),
            pred: Some(pred.into()),
            obj: Some(obj.into()),
        }
    }
}
