//! Error types for tool execution

use std::error::Error as StdError;
use std::fmt;

/// Error type for tool operations
#[derive(Debug)]
pub enum ToolError {
    /// Tool not found in registry
    NotFound {
        /// Tool name that was not found
        name: String,
    },

    /// Arguments were not valid JSON
    InvalidArguments {
        /// Tool name
        tool: String,
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Arguments did not match the tool's parameter schema
    ValidationFailed {
        /// Tool name
        tool: String,
        /// Validation errors
        errors: Vec<String>,
    },

    /// Tool execution failed
    ExecutionFailed {
        /// Tool name
        tool: String,
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Network error talking to a remote tool backend
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The tool could not be constructed
    Configuration {
        /// Tool name
        tool: String,
        /// Error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    /// Tool not found
    NotFound,
    /// Invalid arguments
    InvalidArguments,
    /// Validation failed
    ValidationFailed,
    /// Execution failed
    ExecutionFailed,
    /// Network error
    Network,
    /// Construction failed
    Configuration,
}

impl ToolError {
    /// Get the error kind
    pub fn kind(&self) -> ToolErrorKind {
        match self {
            Self::NotFound { .. } => ToolErrorKind::NotFound,
            Self::InvalidArguments { .. } => ToolErrorKind::InvalidArguments,
            Self::ValidationFailed { .. } => ToolErrorKind::ValidationFailed,
            Self::ExecutionFailed { .. } => ToolErrorKind::ExecutionFailed,
            Self::Network { .. } => ToolErrorKind::Network,
            Self::Configuration { .. } => ToolErrorKind::Configuration,
        }
    }

    /// Shorthand for an execution failure without a source
    pub fn execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            tool: tool.into(),
            message: message.into(),
            source: None,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "Tool not found: {name}"),
            Self::InvalidArguments { tool, message, .. } => {
                write!(f, "Invalid arguments for tool '{tool}': {message}")
            }
            Self::ValidationFailed { tool, errors } => {
                write!(f, "Validation failed for tool '{tool}': {}", errors.join(", "))
            }
            Self::ExecutionFailed { tool, message, .. } => {
                write!(f, "Tool execution failed for '{tool}': {message}")
            }
            Self::Network { message, .. } => write!(f, "Network error: {message}"),
            Self::Configuration { tool, message } => {
                write!(f, "Cannot create tool '{tool}': {message}")
            }
        }
    }
}

impl StdError for ToolError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidArguments { source, .. }
            | Self::ExecutionFailed { source, .. }
            | Self::Network { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<ToolError> for parley_core::Error {
    fn from(err: ToolError) -> Self {
        Self::ToolExecution(err.to_string())
    }
}

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_kind() {
        let error = ToolError::NotFound {
            name: "weather".into(),
        };
        assert_eq!(error.kind(), ToolErrorKind::NotFound);
        assert_eq!(error.to_string(), "Tool not found: weather");

        let error = ToolError::Configuration {
            tool: "serpapi_search".into(),
            message: "missing SERPAPI_API_KEY".into(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot create tool 'serpapi_search': missing SERPAPI_API_KEY"
        );
    }

    #[test]
    fn test_converts_into_core_error() {
        let core: parley_core::Error = ToolError::execution("calculator", "bad input").into();
        assert_eq!(core.kind(), parley_core::ErrorKind::ToolExecution);
        assert!(core.to_string().contains("bad input"));
    }
}
