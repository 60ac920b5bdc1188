//! Per-utterance construction and invocation of the responder

use crate::config::{Config, Mode};
use crate::session::Query;
use async_trait::async_trait;
use futures::FutureExt;
use parley_agent::{Agent, AgentError, Chat, Responder};
use parley_core::Model;
use parley_memory::ConversationMemory;
use parley_providers::{OpenAI, OpenAIBuilder};
use parley_tools::{calculator, SerpApiSearch, ToolError, ToolRegistry};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use thiserror::Error;
use tracing::{debug, info};

/// A failure of one query, tagged with the stage that produced it
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The model backend could not be constructed
    #[error("llm error")]
    Backend(#[source] parley_core::Error),

    /// A tool could not be constructed
    #[error("tool error")]
    Tool(#[source] ToolError),

    /// The agent could not be assembled
    #[error("agent initialization error")]
    Agent(#[source] AgentError),

    /// The call itself failed
    #[error("chain error")]
    Call(#[source] AgentError),

    /// The call panicked
    #[error("query panicked: {0}")]
    Panicked(String),
}

/// Builds a fresh backend, tool set and responder for every utterance
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    /// Create a dispatcher over the startup configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The model the next query will use
    pub fn model(&self) -> Model {
        Model::resolve(self.config.model_override.as_deref())
    }

    fn provider(&self, model: Model) -> Result<OpenAI, DispatchError> {
        let mut builder = OpenAIBuilder::new()
            .maybe_api_key(self.config.openai_api_key.clone())
            .model(model);
        if let Some(url) = &self.config.openai_base_url {
            builder = builder.base_url(url.as_str());
        }
        if let Some(org) = &self.config.openai_organization {
            builder = builder.organization(org.as_str());
        }
        builder.build().map_err(DispatchError::Backend)
    }

    async fn tools(&self) -> Result<ToolRegistry, DispatchError> {
        let search =
            SerpApiSearch::new(self.config.serpapi_api_key.clone()).map_err(DispatchError::Tool)?;
        Ok(ToolRegistry::builder()
            .with_tool(search)
            .with_tool(calculator())
            .build()
            .await)
    }

    async fn dispatch(
        &self,
        memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> Result<String, DispatchError> {
        let model = self.model();
        info!(model = %model, mode = %self.config.mode, "dispatching query");
        let provider = self.provider(model)?;

        match self.config.mode {
            Mode::Chat => Chat::new(provider)
                .respond(memory, input)
                .await
                .map_err(DispatchError::Call),
            Mode::Agent => {
                let tools = self.tools().await?;
                let agent = Agent::builder(provider)
                    .tools(tools)
                    .build()
                    .map_err(DispatchError::Agent)?;
                agent
                    .respond(memory, input)
                    .await
                    .map_err(DispatchError::Call)
            }
        }
    }
}

#[async_trait]
impl Query for Dispatcher {
    async fn query(
        &self,
        memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> Result<String, DispatchError> {
        catch_panics(self.dispatch(memory, input)).await
    }
}

/// Run `call`, turning a panic into [`DispatchError::Panicked`]
pub async fn catch_panics<F>(call: F) -> Result<String, DispatchError>
where
    F: Future<Output = Result<String, DispatchError>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            debug!(%message, "query panicked");
            Err(DispatchError::Panicked(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
