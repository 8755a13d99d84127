use thiserror::Error;

/// Errors that can occur while reading an OBO Graphs document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid OBO Graphs JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but holds no graph
    #[error("Document contains no graphs")]
    NoGraphs,
}

pub type LoadResult<T> = Result<T, LoadError>;
