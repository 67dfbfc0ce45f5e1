use thiserror::Error;

/// Errors that can occur while searching for a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayoutError {
    #[error("No legal actions available at the root")]
    NoLegalActions,

    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for search operations.
pub type Result<T> = std::result::Result<T, PlayoutError>;
