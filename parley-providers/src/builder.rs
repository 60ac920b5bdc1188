//! Builder for provider construction
//!
//! Configuration methods return `self`, and `build()` is the terminal method
//! that validates the settings and constructs the provider.
//!
//! # Examples
//!
//! ```no_run
//! use parley_providers::OpenAIBuilder;
//!
//! let provider = OpenAIBuilder::new()
//!     .api_key("sk-...")
//!     .base_url("http://localhost:8080/v1")
//!     .organization("org-123")
//!     .model("gpt-4")
//!     .build()
//!     .expect("Failed to build provider");
//! ```

use crate::constants::OPENAI_PROVIDER_NAME;
use crate::http::{HttpClient, ReqwestClient};
use crate::openai::{OpenAI, OpenAIConfig};
use parley_core::{Error, Model};
use std::sync::Arc;

/// Builder for constructing OpenAI providers
#[derive(Default)]
pub struct OpenAIBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    organization: Option<String>,
    model: Option<Model>,
    client: Option<Arc<dyn HttpClient>>,
}

impl OpenAIBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API key if one is available
    #[must_use]
    pub fn maybe_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the base URL (for proxies and compatible servers)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the organization ID
    #[must_use]
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Bind the provider to a model
    #[must_use]
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a custom HTTP client
    #[must_use]
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the OpenAI provider
    ///
    /// Fails with [`Error::Configuration`] for an empty model and with
    /// [`Error::Authentication`] when no usable API key was given.
    pub fn build(self) -> Result<OpenAI, Error> {
        if let Some(model) = &self.model {
            if model.as_str().trim().is_empty() {
                return Err(Error::Configuration(
                    "model identifier is empty".to_string(),
                ));
            }
        }

        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Authentication("missing OPENAI_API_KEY".to_string()))?;

        let mut config = OpenAIConfig::new(api_key);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(org) = self.organization {
            config = config.with_organization(org);
        }

        let client = match self.client {
            Some(client) => client,
            None => Arc::new(ReqwestClient::new(OPENAI_PROVIDER_NAME)?),
        };

        let provider = OpenAI::new(config, client);
        Ok(match self.model {
            Some(model) => provider.with_model(model),
            None => provider,
        })
    }
}
