//! Adapter for OpenAI's browsing tool

use crate::protocol::{McpRequest, McpResponse};
use crate::tools::{param_str, ToolAdapter};
use serde_json::{Map, Value};

/// Adapter for the web browsing tool
pub struct BrowserAdapter;

impl ToolAdapter for BrowserAdapter {
    fn tool_id(&self) -> &'static str {
        "browsing"
    }

    fn openai_tool_type(&self) -> &'static str {
        "web_browser"
    }

    fn description(&self) -> &'static str {
        "Fetch and read the content of a web page"
    }

    fn translate_request(&self, request: &McpRequest) -> Map<String, Value> {
        let mut parameters = Map::new();
        parameters.insert("url".to_string(), param_str(request, "url", "").into());
        parameters
    }

    fn translate_response(&self, raw: &str) -> McpResponse {
        let payload: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        let title = payload.get("title").and_then(Value::as_str).unwrap_or("");
        let content = payload.get("content").and_then(Value::as_str).unwrap_or("");

        let mut response = McpResponse::with_content(if title.is_empty() {
            content.to_string()
        } else {
            format!("# {title}\n\n{content}")
        });
        if let Some(url) = payload.get("url").and_then(Value::as_str) {
            response.context.insert("url".to_string(), url.into());
        }
        response
    }
}
