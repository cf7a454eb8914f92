//! Tool adapters and registry
//!
//! Each adapter is a stateless translator between the generic MCP request
//! shape and one OpenAI tool's parameter and result schema. Adapters perform
//! no I/O and hold no mutable state, so the registry can be shared freely
//! across concurrent invocations.

pub mod browser;
pub mod code_interpreter;
pub mod file_manager;
pub mod web_search;

use crate::protocol::{McpRequest, McpResponse};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub use browser::BrowserAdapter;
pub use code_interpreter::CodeInterpreterAdapter;
pub use file_manager::FileManagerAdapter;
pub use web_search::WebSearchAdapter;

/// Stateless translator for one tool kind
///
/// `translate_request` must be total over any request: missing parameters get
/// tool-defined defaults instead of errors. `translate_response` must degrade
/// gracefully: malformed or empty payloads produce an empty-content response,
/// never a panic or error.
pub trait ToolAdapter: Send + Sync {
    /// MCP tool id this adapter serves (e.g. "web-search")
    fn tool_id(&self) -> &'static str;

    /// OpenAI tool type this adapter maps onto (e.g. "retrieval")
    fn openai_tool_type(&self) -> &'static str;

    /// Human-readable description for tool listings
    fn description(&self) -> &'static str;

    /// Map the generic request into OpenAI parameters
    fn translate_request(&self, request: &McpRequest) -> Map<String, Value>;

    /// Map a raw tool output payload into an MCP response
    fn translate_response(&self, raw: &str) -> McpResponse;
}

/// A tool entry in listing responses
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// MCP tool id
    pub id: String,
    /// Human-readable description
    pub description: String,
}

/// Closed registry of tool adapters, keyed by MCP tool id
///
/// Built once at startup from the enabled-tool configuration; immutable
/// afterwards. There is deliberately no runtime registration API.
pub struct ToolRegistry {
    adapters: HashMap<&'static str, Box<dyn ToolAdapter>>,
}

impl ToolRegistry {
    /// Build the registry from the enabled OpenAI tool types
    ///
    /// Adapters whose tool type is not in `enabled` are not registered, so an
    /// invocation against them fails as "not found" without any remote calls.
    pub fn from_enabled(enabled: &[String]) -> Self {
        let all: Vec<Box<dyn ToolAdapter>> = vec![
            Box::new(WebSearchAdapter),
            Box::new(CodeInterpreterAdapter),
            Box::new(BrowserAdapter),
            Box::new(FileManagerAdapter),
        ];

        let adapters = all
            .into_iter()
            .filter(|adapter| enabled.iter().any(|t| t == adapter.openai_tool_type()))
            .map(|adapter| (adapter.tool_id(), adapter))
            .collect();

        Self { adapters }
    }

    /// Look up an adapter by MCP tool id
    pub fn get(&self, tool_id: &str) -> Option<&dyn ToolAdapter> {
        self.adapters.get(tool_id).map(Box::as_ref)
    }

    /// Descriptors of all registered tools, sorted by id for stable listings
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        let mut tools: Vec<ToolDescriptor> = self
            .adapters
            .values()
            .map(|adapter| ToolDescriptor {
                id: adapter.tool_id().to_string(),
                description: adapter.description().to_string(),
            })
            .collect();
        tools.sort_by(|a, b| a.id.cmp(&b.id));
        tools
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no tools are registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

/// Read a string parameter from the request, with a default for missing or
/// non-string values
pub(crate) fn param_str(request: &McpRequest, key: &str, default: &str) -> String {
    request
        .parameters
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
