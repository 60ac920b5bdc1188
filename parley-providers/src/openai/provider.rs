//! OpenAI provider implementation
//!
//! Integrates the chat-completions endpoint through the standard
//! convert, post, parse pipeline.

use crate::http::{create_headers, HttpClient};
use crate::openai::{config::OpenAIConfig, converter::OpenAIConverter, parser::OpenAIParser};
use crate::traits::{RequestConverter, ResponseParser};
use async_trait::async_trait;
use parley_core::{Error, Model, Provider, Request, Response};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// OpenAI provider for chat completions
///
/// A provider may be bound to a model, in which case every request goes to
/// that model regardless of what the request itself names.
///
/// # Example
///
/// ```no_run
/// use parley_providers::{OpenAI, OpenAIConfig};
/// use parley_providers::http::ReqwestClient;
/// use std::sync::Arc;
///
/// let config = OpenAIConfig::new("your-api-key").with_organization("org-id");
/// let client = Arc::new(ReqwestClient::new("openai").unwrap());
/// let provider = OpenAI::new(config, client).with_model("gpt-4o-mini");
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    model: Option<Model>,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given configuration and client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            model: None,
            converter: OpenAIConverter,
            parser: OpenAIParser,
        }
    }

    /// Bind every request to `model`
    #[must_use]
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The bound model, if any
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// The active configuration
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAI")
            .field("base_url", &self.config.base_url)
            .field("organization_id", &self.config.organization_id)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn request(&self, mut request: Request) -> Result<Response, Error> {
        if let Some(model) = &self.model {
            request.model = model.clone();
        }
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "sending chat completion"
        );

        let body = self.converter.convert_request(&request)?;
        let headers = create_headers(
            &self.config.api_key,
            self.config.organization_id.as_deref(),
        )?;
        let reply = self
            .client
            .post(&self.config.chat_url(), headers, body)
            .await?;

        let response = self.parser.parse_response(reply)?;
        debug!(
            finish_reason = ?response.metadata.finish_reason,
            tool_calls = response.tool_calls.len(),
            "chat completion received"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::Message;
    use reqwest::header::{HeaderMap, AUTHORIZATION};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        seen: Mutex<Vec<(String, HeaderMap, Value)>>,
    }

    #[async_trait]
    impl HttpClient for RecordingClient {
        async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error> {
            self.seen
                .lock()
                .unwrap()
                .push((url.to_string(), headers, body));
            Ok(json!({
                "id": "chatcmpl-1",
                "model": "gpt-4",
                "choices": [{ "message": { "role": "assistant", "content": "hello" }, "finish_reason": "stop" }]
            }))
        }
    }

    #[tokio::test]
    async fn test_bound_model_overrides_request() {
        let client = Arc::new(RecordingClient::default());
        let provider = OpenAI::new(
            OpenAIConfig::new("sk-test").with_organization("org-9"),
            client.clone(),
        )
        .with_model("gpt-4o-mini");

        let request = Request::builder()
            .message(Message::user("hi"))
            .model("gpt-3.5-turbo")
            .build();
        let response = provider.request(request).await.unwrap();
        assert_eq!(response.content, "hello");

        let seen = client.seen.lock().unwrap();
        let (url, headers, body) = &seen[0];
        assert_eq!(url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers["openai-organization"], "org-9");
        assert_eq!(body["model"], "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_unbound_provider_uses_request_model() {
        let client = Arc::new(RecordingClient::default());
        let provider = OpenAI::new(OpenAIConfig::new("sk-test"), client.clone());
        assert!(provider.model().is_none());

        provider
            .request(Request::new(vec![Message::user("hi")]))
            .await
            .unwrap();

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen[0].2["model"], "gpt-4");
    }

    #[tokio::test]
    async fn test_empty_bound_model_fails_before_sending() {
        let client = Arc::new(RecordingClient::default());
        let provider = OpenAI::new(OpenAIConfig::new("sk-test"), client.clone()).with_model("");

        let error = provider
            .request(Request::new(vec![Message::user("hi")]))
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Configuration(_)));
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_debug_omits_credentials() {
        let provider = OpenAI::new(
            OpenAIConfig::new("sk-secret"),
            Arc::new(RecordingClient::default()),
        )
        .with_model("gpt-4o");

        let rendered = format!("{provider:?}");
        assert!(rendered.starts_with("OpenAI {"));
        assert!(rendered.contains("gpt-4o"));
        assert!(rendered.contains("https://api.openai.com/v1"));
        assert!(!rendered.contains("sk-secret"));
    }
}
