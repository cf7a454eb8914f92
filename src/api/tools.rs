//! Tool API handlers
//!
//! HTTP request handlers for tool listing and invocation.

use crate::error::AppError;
use crate::orchestrator::Orchestrator;
use crate::protocol::{McpRequest, McpResponse};
use crate::tools::ToolDescriptor;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Server information response
#[derive(Serialize)]
pub struct ServerInfoResponse {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
    /// Registered tools
    pub tools: Vec<ToolDescriptor>,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status indicator
    pub status: String,
}

/// Tools list response
#[derive(Serialize)]
pub struct ToolsListResponse {
    /// Registered tools
    pub tools: Vec<ToolDescriptor>,
}

/// GET / - Server name, version and registered tools
pub async fn root(State(orchestrator): State<Arc<Orchestrator>>) -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse {
        name: "MCP Tool Gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tools: orchestrator.registry().descriptors(),
    })
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /tools - List available tools
pub async fn list_tools(State(orchestrator): State<Arc<Orchestrator>>) -> Json<ToolsListResponse> {
    Json(ToolsListResponse {
        tools: orchestrator.registry().descriptors(),
    })
}

/// POST /v1/tools/:tool_id/invoke - Invoke a tool
///
/// Returns the translated tool response, or a structured error: 404 for an
/// unknown tool id, 500 for any invocation failure.
pub async fn invoke_tool(
    State(orchestrator): State<Arc<Orchestrator>>,
    Path(tool_id): Path<String>,
    Json(request): Json<McpRequest>,
) -> Result<Json<McpResponse>, AppError> {
    let response = orchestrator.handle(&tool_id, request).await?;
    Ok(Json(response))
}
