use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the block grid crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced while validating, hydrating, or persisting grid layouts.
///
/// The normalization steps themselves are total and never produce these.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid item `{0}` has an empty span")]
    EmptySpan(String),
    #[error("grid item `{0}` extends past the grid limit")]
    OutOfBounds(String),
    #[error("grid item id `{0}` appears more than once")]
    DuplicateId(String),
    #[error("`{0}` is not a placeholder id")]
    NotAPlaceholder(String),
    #[error("grid attribute serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
}
