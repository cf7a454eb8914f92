//! OpenAI API integration
//!
//! Contains the Assistants API client and the request/response types it
//! exchanges with the orchestrator.

pub mod client;
pub mod types;

pub use client::{ApiError, InvokeError, OpenAIClient};
pub use types::{ToolOutput, ToolRequest, ToolResponse};
