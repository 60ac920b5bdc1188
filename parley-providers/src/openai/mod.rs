//! OpenAI provider implementation

mod config;
mod converter;
mod parser;
mod provider;

pub use config::OpenAIConfig;
pub use provider::OpenAI;
