//! LLM backend implementations
//!
//! Only the OpenAI chat-completions API is implemented. The crate is split
//! the same way for any backend: a config, a request converter, a response
//! parser, and a provider that glues them to an [`http::HttpClient`].

#![warn(missing_docs)]

pub mod builder;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;

pub mod openai;

pub use builder::OpenAIBuilder;
pub use openai::{OpenAI, OpenAIConfig};
pub use traits::{RequestConverter, ResponseParser};
