//! Single-turn chat

use crate::error::AgentResult;
use crate::responder::Responder;
use async_trait::async_trait;
use parley_core::{Message, Provider, Request};
use parley_memory::ConversationMemory;
use tracing::debug;

/// Sends each utterance as the only message in the request
///
/// Memory is neither consulted nor updated.
pub struct Chat<P: Provider> {
    provider: P,
}

impl<P: Provider> Chat<P> {
    /// Create a chat responder over a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Send one utterance and return the reply text
    pub async fn chat(&self, input: &str) -> AgentResult<String> {
        let request = Request::builder().message(Message::user(input)).build();

        let response = self.provider.request(request).await?;
        debug!(chars = response.content.len(), "chat reply received");
        Ok(response.content)
    }
}

#[async_trait]
impl<P: Provider> Responder for Chat<P> {
    async fn respond(
        &self,
        _memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> AgentResult<String> {
        self.chat(input).await
    }
}
