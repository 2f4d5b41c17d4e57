//! Tool definitions and registry for the agent system.
//!
//! Each tool is a callable capability with a declared name, description, and
//! JSON input schema. The registry maps identifiers to handlers and produces
//! OpenAI function definitions for the hosting orchestration framework,
//! which invokes tools by name and relays their textual output back into
//! the orchestration context.

mod serper;
mod trends;
mod youtube;

pub use serper::SerperSearchTool;
pub use trends::GoogleTrendsTool;
pub use youtube::YoutubeSearchTool;

use crate::config::Settings;
use crate::error::{Result, SpanaError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Well-known tool identifiers.
pub mod names {
    pub const SEARCH_INTERNET: &str = "search_internet";
    pub const YOUTUBE_VIDEO_SEARCH: &str = "youtube_video_search";
    pub const GOOGLE_TRENDS: &str = "google_trends";
}

/// A callable capability an agent may invoke to gather external information.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Identifier the hosting framework dispatches on.
    fn name(&self) -> &str;

    /// Human-readable description handed to the model.
    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments.
    fn parameters(&self) -> serde_json::Value;

    /// Execute with framework-supplied arguments, returning text for the
    /// orchestration channel.
    async fn execute(&self, args: serde_json::Value) -> Result<String>;
}

/// Ordered mapping from tool identifier to handler.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Create a registry with all built-in tools, configured from settings.
    pub fn with_defaults(settings: &Settings) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SerperSearchTool::new(
            settings.search.resolve_api_key(),
        )));
        registry.register(Arc::new(YoutubeSearchTool::new(
            settings.youtube.resolve_api_key(),
        )));
        registry.register(Arc::new(GoogleTrendsTool::new(settings.trends.clone())));
        registry
    }

    /// Register a tool. A tool with a duplicate name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    /// Look up a tool by identifier.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Registered tool identifiers, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// OpenAI function/tool definitions for every registered tool.
    pub fn definitions(&self) -> Vec<async_openai::types::ChatCompletionTool> {
        use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

        self.tools
            .iter()
            .map(|tool| ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject {
                    name: tool.name().to_string(),
                    description: Some(tool.description().to_string()),
                    parameters: Some(tool.parameters()),
                    strict: None,
                },
            })
            .collect()
    }

    /// Execute a tool by identifier with JSON arguments.
    pub async fn dispatch(&self, name: &str, args: serde_json::Value) -> Result<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| SpanaError::Agent(format!("Unknown tool: {}", name)))?;

        info!("Dispatching tool: {}", name);
        tool.execute(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back."
        }

        fn parameters(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "text": {"type": "string"}
                },
                "required": ["text"]
            })
        }

        async fn execute(&self, args: serde_json::Value) -> Result<String> {
            Ok(args["text"].as_str().unwrap_or_default().to_string())
        }
    }

    #[tokio::test]
    async fn test_dispatch_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let output = registry
            .dispatch("echo", serde_json::json!({"text": "hello"}))
            .await
            .unwrap();
        assert_eq!(output, "hello");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_fails() {
        let registry = ToolRegistry::new();
        let err = registry
            .dispatch("nonexistent", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, SpanaError::Agent(_)));
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_definitions_expose_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let defs = registry.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].function.name, "echo");
        assert!(defs[0].function.description.is_some());
        let params = defs[0].function.parameters.as_ref().unwrap();
        assert_eq!(params["required"][0], "text");
    }

    #[test]
    fn test_default_registry_has_all_tools() {
        let registry = ToolRegistry::with_defaults(&Settings::default());
        assert_eq!(
            registry.names(),
            vec![
                names::SEARCH_INTERNET,
                names::YOUTUBE_VIDEO_SEARCH,
                names::GOOGLE_TRENDS
            ]
        );
    }

    #[test]
    fn test_register_replaces_duplicate_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(EchoTool));
        assert_eq!(registry.names().len(), 1);
    }
}
