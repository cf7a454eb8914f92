//! API module
//!
//! Contains the HTTP request handlers and router for the MCP gateway surface.

pub mod tools;

use crate::orchestrator::Orchestrator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the gateway router over a shared orchestrator
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/", get(tools::root))
        .route("/health", get(tools::health))
        .route("/tools", get(tools::list_tools))
        .route("/v1/tools/:tool_id/invoke", post(tools::invoke_tool))
        .with_state(orchestrator)
}
