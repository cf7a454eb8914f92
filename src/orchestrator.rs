//! Invocation orchestrator
//!
//! Sits between the HTTP layer and the OpenAI client: resolves the adapter
//! for a tool id, translates the request, drives the remote invocation, and
//! translates the result back. Owns the end-to-end error-to-status mapping.

use crate::error::AppError;
use crate::openai::{OpenAIClient, ToolRequest};
use crate::protocol::{McpRequest, McpResponse};
use crate::tools::ToolRegistry;
use crate::translator::{generic_response, INSTRUCTIONS_KEY, THREAD_ID_KEY};

/// Drives one tool invocation end to end
///
/// Holds the adapter registry and the shared OpenAI client; both are
/// immutable, so the orchestrator is freely shareable across concurrent
/// requests.
pub struct Orchestrator {
    registry: ToolRegistry,
    client: OpenAIClient,
}

impl Orchestrator {
    /// Create an orchestrator from its collaborators
    pub fn new(registry: ToolRegistry, client: OpenAIClient) -> Self {
        Self { registry, client }
    }

    /// The tool registry, for listing endpoints
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Invoke a tool and produce exactly one response or one error
    ///
    /// Unknown tool ids fail with `ToolNotFound` before any remote call.
    /// Every failure past that point is logged here and surfaced as a single
    /// `ToolInvocation` error; retries happen only inside the client, never
    /// at this level.
    ///
    /// Known limitation, kept for compatibility: when a run yields several
    /// tool outputs only the first is translated; the rest are dropped.
    pub async fn handle(&self, tool_id: &str, request: McpRequest) -> Result<McpResponse, AppError> {
        let adapter = self
            .registry
            .get(tool_id)
            .ok_or_else(|| AppError::ToolNotFound(tool_id.to_string()))?;

        tracing::info!(tool_id = %tool_id, "Invoking tool");

        let parameters = adapter.translate_request(&request);
        let tool_request = ToolRequest {
            tool_type: adapter.openai_tool_type().to_string(),
            parameters,
            thread_id: request.context_str(THREAD_ID_KEY),
            instructions: request.context_str(INSTRUCTIONS_KEY),
        };

        let tool_response = self.client.invoke(tool_request).await.map_err(|err| {
            tracing::error!(tool_id = %tool_id, error = %err, "Tool invocation failed");
            AppError::ToolInvocation(err.to_string())
        })?;

        let response = match tool_response.tool_outputs.first() {
            Some(output) => {
                let mut response = adapter.translate_response(&output.output);
                response.context.insert(
                    THREAD_ID_KEY.to_string(),
                    tool_response.thread_id.clone().into(),
                );
                response
            }
            None => generic_response(&tool_response),
        };

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OpenAiConfig, DEFAULT_ENABLED_TOOLS};
    use mockito::Server;
    use serde_json::json;
    use serial_test::serial;

    fn test_orchestrator(base_url: &str) -> Orchestrator {
        let enabled: Vec<String> = DEFAULT_ENABLED_TOOLS.iter().map(|t| t.to_string()).collect();
        Orchestrator::new(
            ToolRegistry::from_enabled(&enabled),
            OpenAIClient::new(OpenAiConfig::for_testing(base_url)).unwrap(),
        )
    }

    #[tokio::test]
    #[serial]
    async fn unknown_tool_fails_without_remote_calls() {
        let mut server = Server::new_async().await;
        let thread_mock = server
            .mock("POST", "/threads")
            .expect(0)
            .create_async()
            .await;

        let orchestrator = test_orchestrator(&server.url());
        let err = orchestrator
            .handle("no-such-tool", McpRequest::default())
            .await
            .unwrap_err();

        thread_mock.assert_async().await;
        assert!(matches!(err, AppError::ToolNotFound(_)));
    }

    #[tokio::test]
    #[serial]
    async fn empty_outputs_fall_back_to_generic_translation() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/threads")
            .with_status(200)
            .with_body(r#"{"id": "thread_1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/threads/thread_1/messages")
            .with_status(200)
            .with_body(r#"{"id": "msg_1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/assistants")
            .with_status(200)
            .with_body(r#"{"id": "asst_1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/threads/thread_1/runs")
            .with_status(200)
            .with_body(r#"{"id": "run_1", "status": "queued"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/threads/thread_1/runs/run_1")
            .with_status(200)
            .with_body(r#"{"id": "run_1", "status": "completed"}"#)
            .create_async()
            .await;

        let orchestrator = test_orchestrator(&server.url());
        let response = orchestrator
            .handle("web-search", McpRequest::default())
            .await
            .unwrap();

        assert_eq!(response.content, "");
        assert_eq!(response.context["thread_id"], json!("thread_1"));
        // Generic fallback carries no tool-specific metadata
        assert!(response.context.get("search_count").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn caller_thread_id_is_forwarded_from_context() {
        let mut server = Server::new_async().await;
        let thread_mock = server
            .mock("POST", "/threads")
            .expect(0)
            .create_async()
            .await;
        server
            .mock("POST", "/threads/thread_7/messages")
            .with_status(200)
            .with_body(r#"{"id": "msg_1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/assistants")
            .with_status(200)
            .with_body(r#"{"id": "asst_1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/threads/thread_7/runs")
            .with_status(200)
            .with_body(r#"{"id": "run_1", "status": "queued"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/threads/thread_7/runs/run_1")
            .with_status(200)
            .with_body(r#"{"id": "run_1", "status": "completed"}"#)
            .create_async()
            .await;

        let request: McpRequest = serde_json::from_value(json!({
            "parameters": {"query": "follow-up"},
            "context": {"thread_id": "thread_7"}
        }))
        .unwrap();

        let orchestrator = test_orchestrator(&server.url());
        let response = orchestrator.handle("web-search", request).await.unwrap();

        thread_mock.assert_async().await;
        assert_eq!(response.context["thread_id"], json!("thread_7"));
    }
}
