//! OpenAI Assistants API client
//!
//! Owns all interaction with the OpenAI API for a tool invocation: thread
//! lifecycle, message submission, assistant creation, run creation, and run
//! polling. Transient failures are retried with a fixed delay; the poll loop
//! is bounded by a wall-clock deadline.

use crate::config::OpenAiConfig;
use crate::openai::types::{
    Assistant, AssistantTool, CreateAssistantBody, CreateMessageBody, CreateRunBody, Run, Thread,
    ToolOutput, ToolRequest, ToolResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Default instructions when the caller supplies none
const DEFAULT_INSTRUCTIONS: &str = "Execute the requested tool function.";

/// Error from a single remote call attempt
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, body decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("OpenAI API returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the API
        body: String,
    },
}

/// Error from one tool invocation
///
/// Creation variants carry the last attempt's failure after the retry budget
/// is exhausted. `RunTimeout` is distinct from retry exhaustion: it fires
/// purely from elapsed wall-clock time, even if every poll read succeeded.
///
/// Display strings name only the failing step. The upstream error detail
/// stays in the `source` chain and the retry logs; it is never echoed to
/// callers.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// Thread creation failed after all retries
    #[error("Thread creation failed")]
    ThreadCreation(#[source] ApiError),

    /// Assistant creation failed after all retries
    #[error("Assistant creation failed")]
    AssistantCreation(#[source] ApiError),

    /// Run creation failed after all retries
    #[error("Run creation failed")]
    RunCreation(#[source] ApiError),

    /// The run did not reach a terminal status before the deadline
    #[error("Run timed out after {0:?}")]
    RunTimeout(Duration),

    /// A retried remote call exhausted its attempts (message submission,
    /// run polling)
    #[error("OpenAI API request failed")]
    Api(#[from] ApiError),
}

/// Client for executing tool invocations against the OpenAI API
///
/// Holds the shared HTTP connection pool for the lifetime of the process and
/// no per-invocation state, so it is safe to share across concurrent
/// invocations behind an `Arc`.
pub struct OpenAIClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAIClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    /// Returns the underlying `reqwest` error if the HTTP client cannot be
    /// constructed.
    pub fn new(config: OpenAiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Execute one tool invocation to completion
    ///
    /// Resolves (or creates) the thread, submits the tool instruction,
    /// creates an assistant bound to the requested tool type, starts a run
    /// and polls it to a terminal status, then extracts the tool outputs the
    /// run is blocked on. Each remote step is retried up to the configured
    /// bound with a fixed delay; the poll loop is additionally bounded by the
    /// configured run deadline.
    pub async fn invoke(&self, request: ToolRequest) -> Result<ToolResponse, InvokeError> {
        tracing::info!(
            tool_type = %request.tool_type,
            reused_thread = request.thread_id.is_some(),
            "Invoking OpenAI tool"
        );

        // Create or reuse the thread
        let thread_id = match request.thread_id.clone() {
            Some(id) => id,
            None => {
                self.with_retries("create thread", || self.create_thread())
                    .await
                    .map_err(InvokeError::ThreadCreation)?
                    .id
            }
        };

        // Submit the tool instruction into the thread
        let content = format!(
            "Please use the {} tool with these parameters: {}",
            request.tool_type,
            Value::Object(request.parameters.clone())
        );
        self.with_retries("create message", || self.create_message(&thread_id, &content))
            .await?;

        // Create an assistant bound to the requested tool
        let assistant = self
            .with_retries("create assistant", || self.create_assistant(&request))
            .await
            .map_err(InvokeError::AssistantCreation)?;

        // Start the run
        let run = self
            .with_retries("create run", || self.create_run(&thread_id, &assistant.id))
            .await
            .map_err(InvokeError::RunCreation)?;

        // Poll to a terminal status
        let run = self.wait_for_run(&thread_id, &run.id).await?;

        // Extract outputs from the pending action, if any
        let tool_outputs: Vec<ToolOutput> = run
            .required_action
            .and_then(|action| action.submit_tool_outputs)
            .map(|submit| {
                submit
                    .tool_calls
                    .into_iter()
                    .map(|call| ToolOutput {
                        output: call.function.arguments,
                        error: None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        tracing::info!(
            thread_id = %thread_id,
            outputs = tool_outputs.len(),
            "Tool invocation completed"
        );

        Ok(ToolResponse {
            thread_id,
            tool_outputs,
        })
    }

    /// Poll a run until it reaches a terminal status or the deadline passes
    ///
    /// The deadline is checked before each poll read, so the total loop
    /// duration is bounded by `run_timeout + poll_interval`. Each individual
    /// read is retried under the standard policy; exhaustion propagates the
    /// API error through unchanged.
    async fn wait_for_run(&self, thread_id: &str, run_id: &str) -> Result<Run, InvokeError> {
        let started = Instant::now();
        loop {
            if started.elapsed() > self.config.run_timeout {
                tracing::error!(
                    thread_id = %thread_id,
                    run_id = %run_id,
                    deadline_secs = self.config.run_timeout.as_secs_f64(),
                    "Run did not reach a terminal status before the deadline"
                );
                return Err(InvokeError::RunTimeout(self.config.run_timeout));
            }

            let run = self
                .with_retries("retrieve run", || self.retrieve_run(thread_id, run_id))
                .await?;

            if run.status.is_terminal() {
                tracing::debug!(run_id = %run.id, status = ?run.status, "Run reached terminal status");
                return Ok(run);
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Run a remote call under the fixed-delay retry policy
    ///
    /// Attempts `op` up to `max_retries` times, sleeping `retry_delay`
    /// between attempts, and returns the last error once the budget is
    /// exhausted. Deliberately a fixed delay rather than exponential backoff.
    async fn with_retries<T, F, Fut>(&self, step: &str, mut op: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt: u32 = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::warn!(
                        step = step,
                        attempt = attempt,
                        max_retries = self.config.max_retries,
                        error = %err,
                        "Remote call attempt failed"
                    );
                    if attempt >= self.config.max_retries {
                        tracing::error!(step = step, error = %err, "Retry budget exhausted");
                        return Err(err);
                    }
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn create_thread(&self) -> Result<Thread, ApiError> {
        self.post("/threads", &serde_json::json!({})).await
    }

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Value, ApiError> {
        self.post(
            &format!("/threads/{thread_id}/messages"),
            &CreateMessageBody {
                role: "user",
                content: content.to_string(),
            },
        )
        .await
    }

    async fn create_assistant(&self, request: &ToolRequest) -> Result<Assistant, ApiError> {
        self.post(
            "/assistants",
            &CreateAssistantBody {
                name: "Tool Assistant",
                model: self.config.model.clone(),
                tools: vec![AssistantTool {
                    tool_type: request.tool_type.clone(),
                }],
                instructions: request
                    .instructions
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string()),
            },
        )
        .await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, ApiError> {
        self.post(
            &format!("/threads/{thread_id}/runs"),
            &CreateRunBody {
                assistant_id: assistant_id.to_string(),
            },
        )
        .await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, ApiError> {
        self.get(&format!("/threads/{thread_id}/runs/{run_id}")).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.config.api_base_url, path))
            .bearer_auth(&self.config.api_key)
            .header("OpenAI-Beta", "assistants=v2")
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.config.api_base_url, path))
            .bearer_auth(&self.config.api_key)
            .header("OpenAI-Beta", "assistants=v2")
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
