//! Error types shared by every parley crate

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

/// Boxed source error carried by several variants
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The main error type for collaborator operations
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport failures: connection refused, DNS, TLS, broken pipe
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// The backend answered, but with an error
    Provider {
        /// Provider name (e.g., "openai")
        provider: String,
        /// Error message
        message: String,
        /// Server-suggested wait before another attempt (reported, never acted on)
        retry_after: Option<Duration>,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<BoxError>,
    },

    /// A request or value failed local validation
    Validation(String),

    /// A tool could not be built or run
    ToolExecution(String),

    /// The transport gave up waiting
    Timeout,

    /// Credentials missing or rejected
    Authentication(String),

    /// Bad or missing configuration (model id, base URL, mode)
    Configuration(String),

    /// Conversation memory failures
    Storage(String),

    /// The backend reply could not be interpreted
    ResponseError {
        /// Error message
        message: String,
    },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::Network`]
    Network,
    /// See [`Error::Provider`]
    Provider,
    /// See [`Error::Serialization`]
    Serialization,
    /// See [`Error::Validation`]
    Validation,
    /// See [`Error::ToolExecution`]
    ToolExecution,
    /// See [`Error::Timeout`]
    Timeout,
    /// See [`Error::Authentication`]
    Authentication,
    /// See [`Error::Configuration`]
    Configuration,
    /// See [`Error::Storage`]
    Storage,
    /// See [`Error::ResponseError`]
    Response,
}

impl Error {
    /// Build a provider error without a source
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
            retry_after: None,
            source: None,
        }
    }

    /// Build a network error without a source
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Provider { .. } => ErrorKind::Provider,
            Self::Serialization { .. } => ErrorKind::Serialization,
            Self::Validation(_) => ErrorKind::Validation,
            Self::ToolExecution(_) => ErrorKind::ToolExecution,
            Self::Timeout => ErrorKind::Timeout,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Storage(_) => ErrorKind::Storage,
            Self::ResponseError { .. } => ErrorKind::Response,
        }
    }

    /// The server-suggested wait, if the backend sent one
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Provider { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { message, .. } => write!(f, "Network error: {message}"),
            Self::Provider {
                provider,
                message,
                retry_after,
                ..
            } => {
                write!(f, "Provider error ({provider}): {message}")?;
                if let Some(wait) = retry_after {
                    write!(f, " (retry after {}s)", wait.as_secs())?;
                }
                Ok(())
            }
            Self::Serialization { message, .. } => write!(f, "Serialization error: {message}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::ToolExecution(msg) => write!(f, "Tool execution error: {msg}"),
            Self::Timeout => write!(f, "Operation timed out"),
            Self::Authentication(msg) => write!(f, "Authentication error: {msg}"),
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
            Self::ResponseError { message } => write!(f, "Response error: {message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Network { source, .. }
            | Self::Provider { source, .. }
            | Self::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

/// Result type alias for parley operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Network {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_names_the_failing_layer() {
        assert_eq!(
            Error::network("Connection refused").to_string(),
            "Network error: Connection refused"
        );
        assert_eq!(
            Error::provider("openai", "model not found").to_string(),
            "Provider error (openai): model not found"
        );
        assert_eq!(
            Error::Authentication("missing OPENAI_API_KEY".into()).to_string(),
            "Authentication error: missing OPENAI_API_KEY"
        );
        assert_eq!(
            Error::Configuration("empty model identifier".into()).to_string(),
            "Configuration error: empty model identifier"
        );
        assert_eq!(Error::Timeout.to_string(), "Operation timed out");
    }

    #[test]
    fn test_rate_limit_reports_retry_after() {
        let error = Error::Provider {
            provider: "openai".into(),
            message: "Rate limit exceeded".into(),
            retry_after: Some(Duration::from_secs(20)),
            source: None,
        };

        assert_eq!(error.retry_after(), Some(Duration::from_secs(20)));
        assert_eq!(
            error.to_string(),
            "Provider error (openai): Rate limit exceeded (retry after 20s)"
        );
        assert_eq!(Error::Timeout.retry_after(), None);
    }

    #[test]
    fn test_source_is_preserved() {
        let error: Error = io::Error::new(io::ErrorKind::ConnectionReset, "reset").into();
        assert_eq!(error.kind(), ErrorKind::Network);
        assert!(error.source().is_some());

        let json_error = serde_json::from_str::<String>("not json").unwrap_err();
        let error: Error = json_error.into();
        assert_eq!(error.kind(), ErrorKind::Serialization);
        assert!(error.source().is_some());

        assert!(Error::Validation("x".into()).source().is_none());
    }

    #[test]
    fn test_kind_covers_every_variant() {
        let cases = [
            (Error::Validation(String::new()), ErrorKind::Validation),
            (Error::ToolExecution(String::new()), ErrorKind::ToolExecution),
            (Error::Storage(String::new()), ErrorKind::Storage),
            (
                Error::ResponseError {
                    message: String::new(),
                },
                ErrorKind::Response,
            ),
        ];
        for (error, kind) in cases {
            assert_eq!(error.kind(), kind);
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
