//! Tool executor trait and implementations

use crate::error::{Result, ToolError};
use crate::validation::{JsonSchemaValidator, ToolValidator};
use async_trait::async_trait;
use parley_core::{Tool, ToolCall, ToolResult};
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, trace};

/// Type alias for async tool functions
pub type AsyncToolFunction =
    Arc<dyn Fn(Value) -> Pin<Box<dyn Future<Output = Result<Value>> + Send>> + Send + Sync>;

/// Trait for executing tools
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool call
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult>;

    /// Get the tool definition
    fn tool(&self) -> &Tool;

    /// Validate arguments before execution
    ///
    /// The default checks them against the tool's parameter schema.
    async fn validate(&self, args: &Value) -> Result<()> {
        JsonSchemaValidator
            .validate(args, &self.tool().function.parameters)
            .map_err(|errors| ToolError::ValidationFailed {
                tool: self.tool().name.clone(),
                errors,
            })
    }
}

#[async_trait]
impl<T: ToolExecutor + ?Sized> ToolExecutor for Box<T> {
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        (**self).execute(call).await
    }

    fn tool(&self) -> &Tool {
        (**self).tool()
    }

    async fn validate(&self, args: &Value) -> Result<()> {
        (**self).validate(args).await
    }
}

/// Parse a call's JSON argument string
pub fn parse_arguments(call: &ToolCall) -> Result<Value> {
    // Some models send "" for a tool with no parameters.
    if call.arguments.trim().is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_str(&call.arguments).map_err(|e| ToolError::InvalidArguments {
        tool: call.name.clone(),
        message: format!("Failed to parse arguments: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Render a tool's return value as the text handed back to the model
///
/// Strings are passed through unquoted, anything else as compact JSON.
pub fn render_output(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// A function-based tool executor
pub struct FunctionExecutor {
    tool: Tool,
    func: AsyncToolFunction,
}

impl FunctionExecutor {
    /// Create a new function executor
    pub fn new(tool: Tool, func: AsyncToolFunction) -> Self {
        Self { tool, func }
    }

    /// Run the wrapped function directly, bypassing argument parsing
    pub async fn call(&self, args: Value) -> Result<Value> {
        (self.func)(args).await
    }
}

#[async_trait]
impl ToolExecutor for FunctionExecutor {
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let args = parse_arguments(call)?;
        self.validate(&args).await?;

        trace!(tool = %call.name, %args, "running tool");
        match self.call(args).await {
            Ok(result) => Ok(ToolResult::success(&call.id, render_output(result))),
            Err(e) => {
                debug!(tool = %call.name, error = %e, "tool returned an error");
                Ok(ToolResult::error(&call.id, e.to_string()))
            }
        }
    }

    fn tool(&self) -> &Tool {
        &self.tool
    }
}

/// Builder for creating function executors
pub struct FunctionExecutorBuilder {
    name: String,
    description: String,
    parameters: Option<Value>,
    returns: Option<String>,
}

impl FunctionExecutorBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: None,
            returns: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the parameters schema
    #[must_use]
    pub fn parameters(mut self, params: Value) -> Self {
        self.parameters = Some(params);
        self
    }

    /// Set the return type description
    #[must_use]
    pub fn returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    fn into_tool(self) -> Tool {
        let parameters = self
            .parameters
            .unwrap_or_else(|| json!({ "type": "object", "properties": {} }));
        let tool = Tool::new(self.name, self.description, parameters);
        match self.returns {
            Some(returns) => tool.returning(returns),
            None => tool,
        }
    }

    /// Build with an async function
    pub fn build_async<F, Fut>(self, func: F) -> FunctionExecutor
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let func: AsyncToolFunction = Arc::new(move |args| Box::pin(func(args)));
        FunctionExecutor::new(self.into_tool(), func)
    }

    /// Build with a sync function
    pub fn build_sync<F>(self, func: F) -> FunctionExecutor
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        let func = Arc::new(func);
        let func: AsyncToolFunction = Arc::new(move |args| {
            let func = Arc::clone(&func);
            Box::pin(async move { func(args) })
        });
        FunctionExecutor::new(self.into_tool(), func)
    }
}
