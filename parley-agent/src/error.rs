//! Error types for responders

use parley_memory::MemoryError;
use thiserror::Error;

/// Result type for responder operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Errors produced while building or running a responder
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AgentError {
    /// The model backend failed
    #[error(transparent)]
    Provider(#[from] parley_core::Error),

    /// Conversation memory could not be read or updated
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),

    /// The model kept calling tools without producing an answer
    #[error("agent stopped after {0} iterations without a final answer")]
    MaxIterations(usize),

    /// The agent was configured with unusable settings
    #[error("invalid agent configuration: {0}")]
    Configuration(String),
}
