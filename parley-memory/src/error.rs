//! Error types for conversation memory

use thiserror::Error;

/// Result type for memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Errors that can occur while reading or updating memory
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MemoryError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl MemoryError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<MemoryError> for parley_core::Error {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::Configuration(msg) => Self::Configuration(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}
