//! OpenAI Assistants API types
//!
//! Structs that mirror the Assistants v2 JSON request/response formats, plus
//! the provider-level request/response shapes the orchestrator exchanges with
//! the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One tool invocation request against the OpenAI API
///
/// Built by the orchestrator from the generic MCP request plus the adapter's
/// translated parameters; one per invocation.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// OpenAI tool type (e.g. "retrieval", "code_interpreter")
    pub tool_type: String,
    /// Provider-specific parameters produced by the adapter
    pub parameters: Map<String, Value>,
    /// Existing thread to continue, if the caller carried one forward
    pub thread_id: Option<String>,
    /// Optional assistant instructions
    pub instructions: Option<String>,
}

/// One tool output extracted from a completed run
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Raw argument payload of the tool call
    pub output: String,
    /// Error reported for this output, if any
    pub error: Option<String>,
}

/// Terminal artifact of one tool invocation
///
/// `thread_id` is the thread every sub-operation of the invocation ran
/// against; callers may persist it to continue the conversation.
#[derive(Debug, Clone)]
pub struct ToolResponse {
    /// Thread the invocation ran against
    pub thread_id: String,
    /// Outputs extracted from the run, in API order
    pub tool_outputs: Vec<ToolOutput>,
}

/// Status of a run as reported by the API
///
/// Only `Completed`, `Failed` and `RequiresAction` are terminal; every other
/// status (including ones this enum does not know about) keeps the poll loop
/// going until the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Run is waiting to be scheduled
    Queued,
    /// Run is executing
    InProgress,
    /// Run finished successfully
    Completed,
    /// Run finished with an error
    Failed,
    /// Run is waiting for tool outputs to be submitted
    RequiresAction,
    /// Any status this gateway does not recognize
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Whether no further state change will occur without external action
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Failed | RunStatus::RequiresAction
        )
    }
}

/// A run object as returned by create/retrieve
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    /// Run identifier
    pub id: String,
    /// Last observed status
    pub status: RunStatus,
    /// Pending action, present when status is `requires_action`
    #[serde(default)]
    pub required_action: Option<RequiredAction>,
}

/// Pending action attached to a run
#[derive(Debug, Clone, Deserialize)]
pub struct RequiredAction {
    /// Tool outputs the API is waiting for
    #[serde(default)]
    pub submit_tool_outputs: Option<SubmitToolOutputs>,
}

/// The tool calls a run is blocked on
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitToolOutputs {
    /// Tool calls awaiting outputs, in API order
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

/// A single tool call within a pending action
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    /// Tool call identifier
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub id: String,
    /// Function invocation details
    pub function: ToolCallFunction,
}

/// Function name and raw arguments of a tool call
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallFunction {
    /// Function name
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub name: String,
    /// Raw JSON argument payload
    pub arguments: String,
}

/// A thread object as returned by thread creation
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    /// Thread identifier
    pub id: String,
}

/// An assistant object as returned by assistant creation
#[derive(Debug, Clone, Deserialize)]
pub struct Assistant {
    /// Assistant identifier
    pub id: String,
}

/// Request body for message creation
#[derive(Debug, Serialize)]
pub struct CreateMessageBody {
    /// Message role (always "user" here)
    pub role: &'static str,
    /// Message text
    pub content: String,
}

/// Request body for assistant creation
#[derive(Debug, Serialize)]
pub struct CreateAssistantBody {
    /// Display name of the assistant
    pub name: &'static str,
    /// Model used to drive the run
    pub model: String,
    /// Tools the assistant may use
    pub tools: Vec<AssistantTool>,
    /// Instructions for the assistant
    pub instructions: String,
}

/// A tool declaration in an assistant creation request
#[derive(Debug, Serialize)]
pub struct AssistantTool {
    /// OpenAI tool type
    #[serde(rename = "type")]
    pub tool_type: String,
}

/// Request body for run creation
#[derive(Debug, Serialize)]
pub struct CreateRunBody {
    /// Assistant to run against the thread
    pub assistant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_status_terminality() {
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert!(RunStatus::RequiresAction.is_terminal());
        assert!(!RunStatus::Queued.is_terminal());
        assert!(!RunStatus::InProgress.is_terminal());
        assert!(!RunStatus::Unknown.is_terminal());
    }

    #[test]
    fn unknown_status_deserializes_to_catch_all() {
        let run: Run = serde_json::from_str(
            r#"{"id": "run_1", "status": "cancelling"}"#,
        )
        .unwrap();
        assert_eq!(run.status, RunStatus::Unknown);
        assert!(run.required_action.is_none());
    }

    #[test]
    fn required_action_deserializes_tool_calls() {
        let run: Run = serde_json::from_str(
            r#"{
                "id": "run_1",
                "status": "requires_action",
                "required_action": {
                    "submit_tool_outputs": {
                        "tool_calls": [
                            {"id": "call_1", "type": "function",
                             "function": {"name": "search", "arguments": "{\"q\":1}"}}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();
        let action = run.required_action.unwrap();
        let calls = action.submit_tool_outputs.unwrap().tool_calls;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function.arguments, "{\"q\":1}");
    }
}
