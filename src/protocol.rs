//! MCP protocol request and response shapes
//!
//! These are the generic shapes every tool invocation uses at the gateway
//! boundary, independent of which tool is being invoked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic MCP tool invocation request
///
/// Produced by the HTTP layer for each inbound call. `parameters` carries the
/// tool-specific inputs; `context` carries cross-call continuity state such as
/// a `thread_id` from a previous invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McpRequest {
    /// Tool-specific parameters (e.g. `{"query": "weather"}` for web search)
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Optional caller-managed context carried across invocations
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
}

impl McpRequest {
    /// Read a string value out of the request context, if present
    pub fn context_str(&self, key: &str) -> Option<String> {
        self.context
            .as_ref()
            .and_then(|ctx| ctx.get(key))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

/// Generic MCP tool invocation response
///
/// Exactly one is produced per successful invocation. `context` carries state
/// the caller may pass back on the next call (e.g. `thread_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    /// Human-readable result content
    pub content: String,
    /// Error message, if the tool reported one
    pub error: Option<String>,
    /// Continuity / metadata context returned to the caller
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl McpResponse {
    /// Build a successful response with the given content and empty context
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            error: None,
            context: Map::new(),
        }
    }
}
