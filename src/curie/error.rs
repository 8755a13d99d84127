use thiserror::Error;

/// Errors raised while building a prefix matcher or reading a prefix map
#[derive(Error, Debug)]
pub enum CurieError {
    /// Two prefixes share one expansion, so compressing would be ambiguous
    #[error("Prefixes '{first}' and '{second}' both expand to '{expansion}'")]
    DuplicateExpansion {
        expansion: String,
        first: String,
        second: String,
    },

    #[error("Invalid prefix map: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CurieResult<T> = Result<T, CurieError>;
