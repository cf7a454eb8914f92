//! MCP Tool Gateway Library
//!
//! An MCP-compatible gateway server that exposes OpenAI's built-in tools
//! (web search, code execution, browsing, file access) to any client
//! speaking the MCP protocol. This library exposes modules for testing and
//! external use; the main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod protocol;
pub mod tools;
pub mod translator;
