//! HTTP client abstraction and utilities

use crate::constants::HTTP_TIMEOUT_SECS;
use crate::error;
use parley_core::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// HTTP client abstraction
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a JSON POST request and decode the JSON reply
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error>;
}

/// Default HTTP client implementation using reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
    provider: &'static str,
}

impl ReqwestClient {
    /// Create a new HTTP client; `provider` names the backend in errors
    pub fn new(provider: &'static str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client, provider })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error> {
        trace!(url, "POST");
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(error::network_error)?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "backend returned an error status");
            return Err(error::status_error(self.provider, status, &headers, &text));
        }

        response.json().await.map_err(error::network_error)
    }
}

/// Helper to create common headers
pub fn create_headers(api_key: &str, organization: Option<&str>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| Error::Configuration(format!("Invalid API key: {e}")))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(org) = organization {
        headers.insert(
            HeaderName::from_static("openai-organization"),
            HeaderValue::from_str(org)
                .map_err(|e| Error::Configuration(format!("Invalid organization: {e}")))?,
        );
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_headers() {
        let headers = create_headers("sk-test", Some("org-1")).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["openai-organization"], "org-1");

        let headers = create_headers("sk-test", None).unwrap();
        assert!(!headers.contains_key("openai-organization"));
    }

    #[test]
    fn test_create_headers_rejects_control_characters() {
        let error = create_headers("sk-\ntest", None).unwrap_err();
        assert!(error.to_string().starts_with("Configuration error: Invalid API key"));
    }
}
