//! Error types and error handling for the application
//!
//! This module defines the gateway-boundary error type and its conversion to
//! HTTP responses. All errors implement `IntoResponse` to provide consistent
//! error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Gateway-boundary error types
///
/// Exactly one of these is produced per failed invocation. Remote-call detail
/// is logged at the point of failure; only the summarized message is returned
/// to the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested tool id is not registered on this gateway
    #[error("Tool {0} not found")]
    ToolNotFound(String),

    /// Tool invocation failed anywhere past adapter lookup
    #[error("Tool invocation failed: {0}")]
    ToolInvocation(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ToolNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ToolInvocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
