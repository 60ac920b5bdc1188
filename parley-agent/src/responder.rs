//! The capability the chat session drives

use crate::error::AgentResult;
use async_trait::async_trait;
use parley_memory::ConversationMemory;

/// Generates a response given conversation state and the available tools
#[async_trait]
pub trait Responder: Send + Sync {
    /// Answer `input`, reading and updating `memory` as the responder sees fit
    async fn respond(
        &self,
        memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> AgentResult<String>;
}
