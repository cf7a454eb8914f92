//! Adapter for OpenAI's code interpreter tool

use crate::protocol::{McpRequest, McpResponse};
use crate::tools::{param_str, ToolAdapter};
use serde_json::{Map, Value};

/// Adapter for the code execution tool
pub struct CodeInterpreterAdapter;

impl ToolAdapter for CodeInterpreterAdapter {
    fn tool_id(&self) -> &'static str {
        "code-execution"
    }

    fn openai_tool_type(&self) -> &'static str {
        "code_interpreter"
    }

    fn description(&self) -> &'static str {
        "Execute code in a sandboxed interpreter"
    }

    fn translate_request(&self, request: &McpRequest) -> Map<String, Value> {
        let mut parameters = Map::new();
        parameters.insert("code".to_string(), param_str(request, "code", "").into());
        parameters.insert(
            "language".to_string(),
            param_str(request, "language", "python").into(),
        );
        parameters
    }

    fn translate_response(&self, raw: &str) -> McpResponse {
        let payload: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        let output = payload
            .get("output")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let error = payload
            .get("error")
            .and_then(Value::as_str)
            .map(|e| e.to_string());

        let mut response = McpResponse::with_content(output);
        response.error = error;
        response
            .context
            .insert("has_output".to_string(), (!response.content.is_empty()).into());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_language_to_python() {
        let parameters = CodeInterpreterAdapter.translate_request(&McpRequest::default());
        assert_eq!(parameters["code"], json!(""));
        assert_eq!(parameters["language"], json!("python"));
    }

    #[test]
    fn response_extracts_output_and_error() {
        let raw = json!({"output": "42\n", "error": "deprecation warning"}).to_string();
        let response = CodeInterpreterAdapter.translate_response(&raw);
        assert_eq!(response.content, "42\n");
        assert_eq!(response.error.as_deref(), Some("deprecation warning"));
        assert_eq!(response.context["has_output"], json!(true));
    }

    #[test]
    fn response_degrades_on_empty_payload() {
        let response = CodeInterpreterAdapter.translate_response("{}");
        assert_eq!(response.content, "");
        assert!(response.error.is_none());
        assert_eq!(response.context["has_output"], json!(false));
    }
}
