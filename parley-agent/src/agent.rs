//! Tool-using agent
//!
//! The agent runs a think, act, observe cycle on top of the backend's native
//! tool calling. Each iteration sends the conversation so far together with
//! the tool definitions. A reply that asks for tools gets those tools run
//! and their results appended; a reply without tool calls is the answer.

use crate::error::{AgentError, AgentResult};
use crate::responder::Responder;
use async_trait::async_trait;
use parley_core::{Message, Provider, Request, ToolCall, ToolResult};
use parley_memory::ConversationMemory;
use parley_tools::ToolRegistry;
use tracing::{debug, trace, warn};

/// Iterations allowed before the agent gives up
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Instructions the agent starts every conversation with
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant. \
Use the available tools when they help you answer, and reply with a short final answer.";

/// A responder that can call tools and remembers the conversation
pub struct Agent<P: Provider> {
    provider: P,
    tools: ToolRegistry,
    system_prompt: Option<String>,
    max_iterations: usize,
}

impl<P: Provider> Agent<P> {
    /// Start building an agent over a provider
    pub fn builder(provider: P) -> AgentBuilder<P> {
        AgentBuilder::new(provider)
    }

    /// The registry this agent dispatches tool calls to
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Iteration cap
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Run the agent loop for one utterance
    pub async fn run(
        &self,
        memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> AgentResult<String> {
        let mut messages = Vec::new();
        if let Some(prompt) = &self.system_prompt {
            messages.push(Message::system(prompt.as_str()));
        }
        messages.extend(memory.messages().await?);
        messages.push(Message::user(input));

        let tools = self.tools.list_tools().await;

        for iteration in 1..=self.max_iterations {
            trace!(iteration, messages = messages.len(), "agent iteration");
            let request = Request::builder()
                .messages(messages.iter().cloned())
                .tools(tools.iter().cloned())
                .build();

            let response = self.provider.request(request).await?;
            if !response.has_tool_calls() {
                memory.save_exchange(input, &response.content).await?;
                debug!(iteration, "agent produced a final answer");
                return Ok(response.content);
            }

            let calls = response.tool_calls;
            messages.push(Message::assistant_tool_calls(response.content, calls.clone()));
            for call in &calls {
                messages.push(self.run_tool(call).await.into_message());
            }
        }

        warn!(max = self.max_iterations, "agent hit its iteration limit");
        Err(AgentError::MaxIterations(self.max_iterations))
    }

    async fn run_tool(&self, call: &ToolCall) -> ToolResult {
        debug!(%call, "executing tool call");
        match self.tools.execute(call).await {
            Ok(result) => result,
            // The model gets to see what went wrong and try again.
            Err(e) => ToolResult::error(&call.id, format!("Error: {e}")),
        }
    }
}

#[async_trait]
impl<P: Provider> Responder for Agent<P> {
    async fn respond(
        &self,
        memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> AgentResult<String> {
        self.run(memory, input).await
    }
}

/// Builder for [`Agent`]
pub struct AgentBuilder<P: Provider> {
    provider: P,
    tools: ToolRegistry,
    system_prompt: Option<String>,
    max_iterations: usize,
}

impl<P: Provider> AgentBuilder<P> {
    /// Create a builder with defaults: no tools, the default prompt, five iterations
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            tools: ToolRegistry::new(),
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Use this tool registry
    #[must_use]
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Replace the system prompt
    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Send no system prompt at all
    #[must_use]
    pub fn without_system_prompt(mut self) -> Self {
        self.system_prompt = None;
        self
    }

    /// Cap the number of model round-trips per utterance
    #[must_use]
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Build the agent
    pub fn build(self) -> AgentResult<Agent<P>> {
        if self.max_iterations == 0 {
            return Err(AgentError::Configuration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(Agent {
            provider: self.provider,
            tools: self.tools,
            system_prompt: self.system_prompt,
            max_iterations: self.max_iterations,
        })
    }
}
