//! Tool registry for managing available tools

use crate::error::{Result, ToolError};
use crate::executor::ToolExecutor;
use parley_core::{Tool, ToolCall, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Registry for managing tools
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, Arc<dyn ToolExecutor>>>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new registry builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Register a tool executor, replacing any tool with the same name
    pub async fn register(&self, executor: impl ToolExecutor + 'static) {
        let name = executor.tool().name.clone();
        debug!(tool = %name, "registering tool");
        self.tools.write().await.insert(name, Arc::new(executor));
    }

    /// Get a tool by name
    pub async fn get(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.tools.read().await.get(name).cloned()
    }

    /// All registered tool definitions, ordered by name
    pub async fn list_tools(&self) -> Vec<Tool> {
        let tools = self.tools.read().await;
        let mut result: Vec<Tool> = tools.values().map(|e| e.tool().clone()).collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    /// Registered tool names, sorted
    pub async fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    /// Execute a tool call
    pub async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let executor = self.get(&call.name).await.ok_or_else(|| ToolError::NotFound {
            name: call.name.clone(),
        })?;

        // The lock is already released here.
        executor.execute(call).await
    }

    /// Remove a tool from the registry
    pub async fn remove(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.tools.write().await.remove(name)
    }

    /// Check if a tool exists
    pub async fn contains(&self, name: &str) -> bool {
        self.tools.read().await.contains_key(name)
    }

    /// Get the number of registered tools
    pub async fn len(&self) -> usize {
        self.tools.read().await.len()
    }

    /// Check if the registry is empty
    pub async fn is_empty(&self) -> bool {
        self.tools.read().await.is_empty()
    }
}

/// Builder for creating a registry with tools
#[derive(Default)]
pub struct RegistryBuilder {
    executors: Vec<Box<dyn ToolExecutor>>,
}

impl RegistryBuilder {
    /// Add a tool executor
    #[must_use]
    pub fn with_tool(mut self, executor: impl ToolExecutor + 'static) -> Self {
        self.executors.push(Box::new(executor));
        self
    }

    /// Build the registry
    pub async fn build(self) -> ToolRegistry {
        let registry = ToolRegistry::new();
        for executor in self.executors {
            registry.register(executor).await;
        }
        registry
    }
}
