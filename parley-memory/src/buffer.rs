//! In-process conversation buffer

use crate::{ConversationMemory, MemoryError, MemoryResult};
use async_trait::async_trait;
use parley_core::Message;
use tracing::{debug, trace};

/// Keeps the conversation in a `Vec`, optionally trimmed to the last N exchanges
#[derive(Debug, Clone, Default)]
pub struct BufferMemory {
    messages: Vec<Message>,
    max_exchanges: Option<usize>,
}

impl BufferMemory {
    /// Create an unbounded buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that only remembers the most recent `max_exchanges` exchanges
    pub fn with_window(max_exchanges: usize) -> MemoryResult<Self> {
        if max_exchanges == 0 {
            return Err(MemoryError::configuration(
                "window must hold at least one exchange",
            ));
        }
        Ok(Self {
            messages: Vec::new(),
            max_exchanges: Some(max_exchanges),
        })
    }

    /// Number of stored messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn trim(&mut self) {
        if let Some(max) = self.max_exchanges {
            let keep = max * 2;
            if self.messages.len() > keep {
                let dropped = self.messages.len() - keep;
                self.messages.drain(..dropped);
                trace!(dropped, "trimmed conversation buffer");
            }
        }
    }
}

#[async_trait]
impl ConversationMemory for BufferMemory {
    async fn messages(&self) -> MemoryResult<Vec<Message>> {
        Ok(self.messages.clone())
    }

    async fn save_exchange(&mut self, user: &str, assistant: &str) -> MemoryResult<()> {
        self.messages.push(Message::user(user));
        self.messages.push(Message::assistant(assistant));
        self.trim();
        debug!(messages = self.messages.len(), "saved exchange to memory");
        Ok(())
    }

    async fn clear(&mut self) -> MemoryResult<()> {
        self.messages.clear();
        debug!("cleared conversation memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::Role;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_exchanges_are_kept_in_order() {
        let mut memory = BufferMemory::new();
        memory.save_exchange("hi", "hello").await.unwrap();
        memory.save_exchange("2+2", "4").await.unwrap();

        let messages = memory.messages().await.unwrap();
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert_eq!(messages[2].content, "2+2");
        assert_eq!(messages[3].content, "4");
    }

    #[tokio::test]
    async fn test_window_drops_oldest_exchange() {
        let mut memory = BufferMemory::with_window(1).unwrap();
        memory.save_exchange("first", "one").await.unwrap();
        memory.save_exchange("second", "two").await.unwrap();

        let messages = memory.messages().await.unwrap();
        assert_eq!(messages, vec![Message::user("second"), Message::assistant("two")]);
    }

    #[test]
    fn test_zero_window_is_rejected() {
        assert!(matches!(
            BufferMemory::with_window(0),
            Err(MemoryError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_clear() {
        let mut memory = BufferMemory::new();
        memory.save_exchange("a", "b").await.unwrap();
        assert_eq!(memory.len(), 2);

        memory.clear().await.unwrap();
        assert!(memory.is_empty());
    }
}
