//! Conversation memory for parley agents
//!
//! Memory is the ordered message history an agent replays in front of each
//! new user message. It lives only as long as the process.

#![warn(missing_docs)]

pub mod buffer;
pub mod error;

pub use buffer::BufferMemory;
pub use error::{MemoryError, MemoryResult};

use async_trait::async_trait;
use parley_core::Message;

/// Storage for the running conversation
#[async_trait]
pub trait ConversationMemory: Send + Sync {
    /// The remembered history, oldest first
    async fn messages(&self) -> MemoryResult<Vec<Message>>;

    /// Record one completed exchange
    async fn save_exchange(&mut self, user: &str, assistant: &str) -> MemoryResult<()>;

    /// Forget everything
    async fn clear(&mut self) -> MemoryResult<()>;
}
