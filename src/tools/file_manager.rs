//! Adapter for OpenAI's file search tool

use crate::protocol::{McpRequest, McpResponse};
use crate::tools::{param_str, ToolAdapter};
use serde_json::{Map, Value};

/// Adapter for the file management tool
pub struct FileManagerAdapter;

impl ToolAdapter for FileManagerAdapter {
    fn tool_id(&self) -> &'static str {
        "file-management"
    }

    fn openai_tool_type(&self) -> &'static str {
        "file_search"
    }

    fn description(&self) -> &'static str {
        "List and inspect files available to the assistant"
    }

    fn translate_request(&self, request: &McpRequest) -> Map<String, Value> {
        let mut parameters = Map::new();
        parameters.insert(
            "operation".to_string(),
            param_str(request, "operation", "list").into(),
        );
        parameters.insert("path".to_string(), param_str(request, "path", "").into());
        parameters
    }

    fn translate_response(&self, raw: &str) -> McpResponse {
        let payload: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        let files = payload
            .get("files")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let content = files
            .iter()
            .filter_map(|file| file.get("name").and_then(Value::as_str))
            .map(|name| format!("- {name}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut response = McpResponse::with_content(content);
        response
            .context
            .insert("file_count".to_string(), files.len().into());
        response
    }
}
