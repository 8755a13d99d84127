use thiserror::Error;

/// Errors that can occur when querying a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The node is not part of the graph. Distinguishes "no such node" from
    /// "known node without neighbours".
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

impl GraphError {
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound(format!("{:?}", node))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
