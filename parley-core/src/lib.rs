//! Core traits and types for the parley chat client
//!
//! This crate holds the vocabulary every other parley crate speaks: messages,
//! requests, responses, tool definitions, the [`Provider`] trait and the
//! shared [`Error`] type.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{BoxError, Error, ErrorKind, Result};
pub use provider::Provider;
pub use types::{
    message::{Message, Metadata, Role},
    request::{
        BuildError, Model, Parameters, ParametersBuilder, Request, RequestBuilder, DEFAULT_MODEL,
    },
    response::{FinishReason, Response, ResponseMetadata, Usage},
    tool::{Function, Tool, ToolCall, ToolResult},
};
