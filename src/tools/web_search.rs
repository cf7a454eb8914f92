//! Adapter for OpenAI's web search tool

use crate::protocol::{McpRequest, McpResponse};
use crate::tools::{param_str, ToolAdapter};
use crate::translator::format_search_results;
use serde_json::{Map, Value};

/// Adapter for the web search tool
pub struct WebSearchAdapter;

impl ToolAdapter for WebSearchAdapter {
    fn tool_id(&self) -> &'static str {
        "web-search"
    }

    fn openai_tool_type(&self) -> &'static str {
        "retrieval"
    }

    fn description(&self) -> &'static str {
        "Search the web for real-time information"
    }

    fn translate_request(&self, request: &McpRequest) -> Map<String, Value> {
        let query = param_str(request, "query", "");
        tracing::debug!(query = %query, "Translating web search request");

        let mut parameters = Map::new();
        parameters.insert("query".to_string(), query.into());
        parameters
    }

    fn translate_response(&self, raw: &str) -> McpResponse {
        let payload: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        tracing::debug!(count = results.len(), "Translating web search response");

        let mut response = McpResponse::with_content(format_search_results(&results));
        response
            .context
            .insert("search_count".to_string(), results.len().into());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_to_empty_query() {
        let parameters = WebSearchAdapter.translate_request(&McpRequest::default());
        assert_eq!(parameters["query"], json!(""));
    }

    #[test]
    fn request_extracts_query() {
        let request: McpRequest =
            serde_json::from_value(json!({"parameters": {"query": "weather"}})).unwrap();
        let parameters = WebSearchAdapter.translate_request(&request);
        assert_eq!(parameters["query"], json!("weather"));
    }

    #[test]
    fn response_formats_results_and_counts_them() {
        let raw = json!({
            "results": [
                {"title": "A", "url": "https://a.example", "snippet": "first"},
                {"title": "B", "url": "https://b.example", "snippet": "second"}
            ]
        })
        .to_string();

        let response = WebSearchAdapter.translate_response(&raw);
        assert!(response.content.contains("[A](https://a.example): first"));
        assert_eq!(response.context["search_count"], json!(2));
        assert!(response.error.is_none());
    }

    #[test]
    fn response_degrades_on_empty_payload() {
        let response = WebSearchAdapter.translate_response("{}");
        assert_eq!(response.content, "");
        assert_eq!(response.context["search_count"], json!(0));
    }

    #[test]
    fn response_degrades_on_garbage_payload() {
        let response = WebSearchAdapter.translate_response("not json at all");
        assert_eq!(response.content, "");
        assert_eq!(response.context["search_count"], json!(0));
    }
}
