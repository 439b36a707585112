//! Entity store error types.

use thiserror::Error;

/// Errors that can occur while loading or saving datasets.
///
/// Store mutations never fail: updates and removals of unknown ids are
/// silently ignored.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dataset file could not be read or written.
    #[error("Dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset JSON is malformed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for entity store operations.
pub type StoreResult<T> = Result<T, StoreError>;
