//! Tool definitions, the calls a model makes, and what comes back

use crate::types::message::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A tool advertised to the model
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    /// Name the model calls the tool by
    pub name: String,
    /// Shown to the model so it can decide when the tool applies
    pub description: String,
    /// Argument schema and return description
    pub function: Function,
}

impl Tool {
    /// Define a tool taking arguments described by the JSON Schema `parameters`
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            function: Function {
                parameters,
                returns: None,
            },
        }
    }

    /// Describe what the tool returns
    #[must_use]
    pub fn returning(mut self, returns: impl Into<String>) -> Self {
        self.function.returns = Some(returns.into());
        self
    }
}

/// Argument schema of a tool
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// JSON Schema the arguments must satisfy
    pub parameters: Value,
    /// What the tool hands back, in words
    pub returns: Option<String>,
}

/// A tool invocation requested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Backend-assigned id, echoed back on the result
    pub id: String,
    /// Name of the tool to run
    pub name: String,
    /// Arguments as the raw JSON text the model produced
    pub arguments: String,
}

impl ToolCall {
    /// Create a tool call
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

impl fmt::Display for ToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

/// Outcome of running one tool call
///
/// Failures are still results: their text goes back to the model like any
/// other observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Id of the call this answers
    pub call_id: String,
    /// Output text, or the failure description
    pub content: String,
    /// Whether the tool ran successfully
    pub success: bool,
}

impl ToolResult {
    /// A successful result
    pub fn success(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    /// A failed result carrying the error text
    pub fn error(call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: error.into(),
            success: false,
        }
    }

    /// The tool message that reports this result to the model
    pub fn into_message(self) -> Message {
        Message::tool(self.content, self.call_id)
    }
}
