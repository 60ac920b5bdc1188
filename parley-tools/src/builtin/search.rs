use crate::error::{Result, ToolError};
use crate::executor::{parse_arguments, ToolExecutor};
use crate::validation::param_schema;
use async_trait::async_trait;
use parley_core::{Tool, ToolCall, ToolResult};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Name the search tool registers under
pub const SERPAPI_TOOL_NAME: &str = "serpapi_search";

/// Public SerpAPI endpoint
pub const SERPAPI_DEFAULT_BASE_URL: &str = "https://serpapi.com";

const NO_RESULT: &str = "No good search result found";
const TIMEOUT_SECS: u64 = 30;

/// Web search through SerpAPI's Google engine
pub struct SerpApiSearch {
    tool: Tool,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SerpApiSearch {
    /// Create the tool; fails without a non-empty API key
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ToolError::Configuration {
                tool: SERPAPI_TOOL_NAME.to_string(),
                message: "missing SERPAPI_API_KEY".to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            tool: Tool::new(
                SERPAPI_TOOL_NAME,
                "A wrapper around Google Search. Useful for when you need to answer \
                 questions about current events. Input should be a search query.",
                param_schema()
                    .string_required("query", "The search query")
                    .build(),
            )
            .returning("The best matching answer text"),
            api_key,
            base_url: SERPAPI_DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Point the tool at another SerpAPI-compatible host
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Run a query and return the best answer text
    pub async fn search(&self, query: &str) -> Result<String> {
        debug!(query, "searching SerpAPI");
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::execution(
                SERPAPI_TOOL_NAME,
                format!("search failed with status {status}: {}", body.trim()),
            ));
        }

        let body: Value = response.json().await?;
        Ok(best_answer(&body).unwrap_or_else(|| NO_RESULT.to_string()))
    }
}

/// Pick the most direct answer from a SerpAPI result page
fn best_answer(body: &Value) -> Option<String> {
    let candidates = [
        body.pointer("/answer_box/answer"),
        body.pointer("/answer_box/snippet"),
        body.pointer("/answer_box/snippet_highlighted_words/0"),
        body.pointer("/sports_results/game_spotlight"),
        body.pointer("/knowledge_graph/description"),
        body.pointer("/organic_results/0/snippet"),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        })
}

#[async_trait]
impl ToolExecutor for SerpApiSearch {
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let args = parse_arguments(call)?;
        self.validate(&args).await?;
        let query = args["query"].as_str().unwrap_or_default();

        match self.search(query).await {
            Ok(answer) => Ok(ToolResult::success(&call.id, answer)),
            Err(e) => {
                debug!(error = %e, "search failed");
                Ok(ToolResult::error(&call.id, e.to_string()))
            }
        }
    }

    fn tool(&self) -> &Tool {
        &self.tool
    }
}
