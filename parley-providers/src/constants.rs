//! Constants for provider implementations

/// Name reported in provider errors
pub const OPENAI_PROVIDER_NAME: &str = "openai";

/// Default OpenAI base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Transport timeout for a single HTTP exchange
pub const HTTP_TIMEOUT_SECS: u64 = 300;
