//! Error types for the urlaub ecosystem.

use thiserror::Error;

/// Errors that can occur in planner operations.
#[derive(Error, Debug)]
pub enum UrlaubError {
    #[error("Invalid value: {0}")]
    Format(String),

    #[error("Nothing to do: {0}")]
    EmptyResult(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for planner operations.
pub type UrlaubResult<T> = Result<T, UrlaubError>;
