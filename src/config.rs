//! Startup configuration from the environment

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Transcript path used when `CHAT_FILE` is unset or empty
pub const DEFAULT_CHAT_FILE: &str = "chat.txt";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `CHAT_MODE` named something other than `agent` or `chat`
    #[error("invalid CHAT_MODE `{0}`, expected `agent` or `chat`")]
    InvalidMode(String),
}

/// Which responder answers each utterance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Tool-using agent with conversation memory
    #[default]
    Agent,
    /// Plain single-turn chat
    Chat,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "agent" => Ok(Self::Agent),
            "chat" => Ok(Self::Chat),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Agent => "agent",
            Self::Chat => "chat",
        })
    }
}

/// Everything the session needs from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Transcript path
    pub chat_file: PathBuf,
    /// Raw `OPENAI_MODEL`; `Some("")` is kept so the backend can reject it
    pub model_override: Option<String>,
    /// `OPENAI_API_KEY`
    pub openai_api_key: Option<String>,
    /// `OPENAI_BASE_URL`
    pub openai_base_url: Option<String>,
    /// `OPENAI_ORGANIZATION`
    pub openai_organization: Option<String>,
    /// `SERPAPI_API_KEY`
    pub serpapi_api_key: Option<String>,
    /// `CHAT_MODE`
    pub mode: Mode,
}

impl Config {
    /// Read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty strings count as unset everywhere except OPENAI_MODEL.
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match lookup("CHAT_MODE") {
            Some(raw) => raw.parse()?,
            None => Mode::default(),
        };

        Ok(Self {
            chat_file: non_empty("CHAT_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_CHAT_FILE), PathBuf::from),
            model_override: lookup("OPENAI_MODEL"),
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: non_empty("OPENAI_BASE_URL"),
            openai_organization: non_empty("OPENAI_ORGANIZATION"),
            serpapi_api_key: non_empty("SERPAPI_API_KEY"),
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.chat_file, PathBuf::from("chat.txt"));
        assert_eq!(config.model_override, None);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.mode, Mode::Agent);
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            ("CHAT_FILE", "/tmp/talk.txt"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("OPENAI_ORGANIZATION", "org-1"),
            ("SERPAPI_API_KEY", "serp"),
            ("CHAT_MODE", "chat"),
        ])
        .unwrap();

        assert_eq!(config.chat_file, PathBuf::from("/tmp/talk.txt"));
        assert_eq!(config.model_override.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.openai_organization.as_deref(), Some("org-1"));
        assert_eq!(config.serpapi_api_key.as_deref(), Some("serp"));
        assert_eq!(config.mode, Mode::Chat);
    }

    #[test]
    fn test_empty_values() {
        let config = config_from(&[("CHAT_FILE", ""), ("OPENAI_MODEL", ""), ("OPENAI_API_KEY", "")])
            .unwrap();
        assert_eq!(config.chat_file, PathBuf::from("chat.txt"));
        assert_eq!(config.model_override.as_deref(), Some(""));
        assert_eq!(config.openai_api_key, None);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Agent".parse::<Mode>(), Ok(Mode::Agent));
        assert_eq!(" chat ".parse::<Mode>(), Ok(Mode::Chat));
        assert_eq!(
            config_from(&[("CHAT_MODE", "shell")]),
            Err(ConfigError::InvalidMode("shell".to_string()))
        );
        assert_eq!(Mode::Chat.to_string(), "chat");
    }
}
