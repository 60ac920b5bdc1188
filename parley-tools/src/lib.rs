//! Tool execution framework for the parley chat client
//!
//! Tools are described by a [`Tool`] definition the model sees and executed
//! through the [`ToolExecutor`] trait. A [`ToolRegistry`] dispatches calls by
//! name. Two built-in tools ship with the crate: an arithmetic calculator and
//! a SerpAPI-backed web search.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod executor;
pub mod registry;
pub mod validation;

// Re-export core types from parley-core
pub use parley_core::{Function, Tool, ToolCall, ToolResult};

// Re-export main types
pub use builtin::{calculator, SerpApiSearch};
pub use error::{ToolError, ToolErrorKind};
pub use executor::{AsyncToolFunction, FunctionExecutor, FunctionExecutorBuilder, ToolExecutor};
pub use registry::{RegistryBuilder, ToolRegistry};
pub use validation::{param_schema, JsonSchemaValidator, ToolValidator};
