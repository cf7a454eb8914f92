//! Generic OpenAI-to-MCP response translation
//!
//! Used when a run completes without producing tool outputs, and by adapters
//! that format structured results into readable content.

use crate::openai::ToolResponse;
use crate::protocol::McpResponse;
use serde_json::Value;

/// Context key under which the thread identifier is carried across calls
pub const THREAD_ID_KEY: &str = "thread_id";

/// Context key for an instruction override supplied by the caller
pub const INSTRUCTIONS_KEY: &str = "instructions";

/// Translate a whole `ToolResponse` without tool-specific knowledge
///
/// Fallback path for runs that finished without a pending action: the content
/// is the concatenation of whatever outputs exist (usually none) and the
/// thread id is carried in the context.
pub fn generic_response(response: &ToolResponse) -> McpResponse {
    let content = response
        .tool_outputs
        .iter()
        .map(|output| output.output.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let mut mcp = McpResponse::with_content(content);
    mcp.context
        .insert(THREAD_ID_KEY.to_string(), response.thread_id.clone().into());
    mcp
}

/// Format a list of search results as a markdown list
///
/// Results missing a title or URL render with empty placeholders rather than
/// being skipped, so result counts stay honest.
pub fn format_search_results(results: &[Value]) -> String {
    results
        .iter()
        .map(|result| {
            let title = result.get("title").and_then(Value::as_str).unwrap_or("");
            let url = result.get("url").and_then(Value::as_str).unwrap_or("");
            let snippet = result.get("snippet").and_then(Value::as_str).unwrap_or("");
            format!("- [{title}]({url}): {snippet}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::ToolOutput;
    use serde_json::json;

    #[test]
    fn generic_response_carries_thread_id() {
        let response = ToolResponse {
            thread_id: "thread_9".to_string(),
            tool_outputs: vec![],
        };
        let mcp = generic_response(&response);
        assert_eq!(mcp.content, "");
        assert!(mcp.error.is_none());
        assert_eq!(mcp.context[THREAD_ID_KEY], json!("thread_9"));
    }

    #[test]
    fn generic_response_joins_outputs() {
        let response = ToolResponse {
            thread_id: "thread_9".to_string(),
            tool_outputs: vec![
                ToolOutput {
                    output: "one".to_string(),
                    error: None,
                },
                ToolOutput {
                    output: "two".to_string(),
                    error: None,
                },
            ],
        };
        assert_eq!(generic_response(&response).content, "one\ntwo");
    }

    #[test]
    fn format_search_results_handles_missing_fields() {
        let results = vec![
            json!({"title": "Weather", "url": "https://example.com", "snippet": "Sunny"}),
            json!({"title": "No url"}),
        ];
        let formatted = format_search_results(&results);
        assert!(formatted.contains("[Weather](https://example.com): Sunny"));
        assert!(formatted.contains("[No url]()"));
        assert_eq!(formatted.lines().count(), 2);
    }

    #[test]
    fn format_search_results_empty_input() {
        assert_eq!(format_search_results(&[]), "");
    }
}
