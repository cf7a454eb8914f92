//! MCP Tool Gateway
//!
//! An MCP-compatible HTTP server that wraps OpenAI's built-in tools.
//! Provides endpoints for tool discovery and invocation.

mod api;
mod config;
mod error;
mod openai;
mod orchestrator;
mod protocol;
mod tools;
mod translator;

use axum::{extract::Request, middleware::Next, response::Response};
use config::Config;
use openai::OpenAIClient;
use orchestrator::Orchestrator;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tools::ToolRegistry;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration; a missing API key is fatal here, before any routes
    // are served
    let config = Config::from_env()?;
    info!(
        addr = %config.server_addr(),
        enabled_tools = ?config.enabled_tools,
        "Configuration loaded"
    );

    let registry = ToolRegistry::from_enabled(&config.enabled_tools);
    if registry.is_empty() {
        tracing::warn!("No tools enabled; all invocations will fail with 404");
    }
    info!(
        count = registry.len(),
        tools = ?registry
            .descriptors()
            .iter()
            .map(|d| d.id.clone())
            .collect::<Vec<_>>(),
        "Tool registry built"
    );

    let client = OpenAIClient::new(config.openai.clone())?;
    let orchestrator = Arc::new(Orchestrator::new(registry, client));

    // Build our application with routes and middleware
    let app = api::router(orchestrator)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()); // Allow CORS for development

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("🚀 MCP gateway running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
