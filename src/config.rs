//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The only fatal condition is a missing OpenAI API
//! key; everything else falls back to a default.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading configuration at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// OPENAI_API_KEY is unset or empty; the gateway cannot start without it
    #[error("OPENAI_API_KEY is not set")]
    ApiKeyMissing,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// OpenAI client configuration
    pub openai: OpenAiConfig,
    /// OpenAI tool types enabled for this gateway instance
    pub enabled_tools: Vec<String>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// OpenAI client configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key used for all requests
    pub api_key: String,
    /// Base URL of the OpenAI API (overridable for testing)
    pub api_base_url: String,
    /// Model used for tool assistants
    pub model: String,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
    /// Maximum attempts for each retried remote step
    pub max_retries: u32,
    /// Fixed delay between retry attempts
    pub retry_delay: Duration,
    /// Delay between run status polls
    pub poll_interval: Duration,
    /// Wall-clock deadline for a run to reach a terminal status
    pub run_timeout: Duration,
}

/// Default set of enabled OpenAI tool types
pub const DEFAULT_ENABLED_TOOLS: &[&str] =
    &["retrieval", "code_interpreter", "web_browser", "file_search"];

impl Config {
    /// Load configuration from environment variables with defaults
    ///
    /// # Errors
    /// Returns `ConfigError::ApiKeyMissing` if `OPENAI_API_KEY` is unset or
    /// empty. All other variables have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            return Err(ConfigError::ApiKeyMissing);
        }

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            openai: OpenAiConfig {
                api_key,
                api_base_url: env::var("OPENAI_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                request_timeout: Duration::from_secs(
                    env::var("OPENAI_REQUEST_TIMEOUT_SECS")
                        .ok()
                        .and_then(|t| t.parse().ok())
                        .unwrap_or(30),
                ),
                max_retries: env::var("OPENAI_MAX_RETRIES")
                    .ok()
                    .and_then(|r| r.parse().ok())
                    .unwrap_or(3),
                retry_delay: Duration::from_millis(
                    env::var("OPENAI_RETRY_DELAY_MS")
                        .ok()
                        .and_then(|d| d.parse().ok())
                        .unwrap_or(1000),
                ),
                poll_interval: Duration::from_millis(
                    env::var("RUN_POLL_INTERVAL_MS")
                        .ok()
                        .and_then(|d| d.parse().ok())
                        .unwrap_or(1000),
                ),
                run_timeout: Duration::from_secs(
                    env::var("RUN_TIMEOUT_SECS")
                        .ok()
                        .and_then(|t| t.parse().ok())
                        .unwrap_or(60),
                ),
            },
            enabled_tools: env::var("ENABLED_TOOLS")
                .map(|list| {
                    list.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    DEFAULT_ENABLED_TOOLS.iter().map(|t| t.to_string()).collect()
                }),
        })
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl OpenAiConfig {
    /// Build a config suitable for tests: millisecond timings so the retry
    /// and timeout paths run fast, and a caller-supplied base URL so the
    /// client can be pointed at a mock server.
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            api_base_url: base_url.to_string(),
            model: "gpt-4o-mini".to_string(),
            request_timeout: Duration::from_secs(5),
            max_retries: 3,
            retry_delay: Duration::from_millis(10),
            poll_interval: Duration::from_millis(20),
            run_timeout: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enabled_tools_cover_all_adapters() {
        assert_eq!(DEFAULT_ENABLED_TOOLS.len(), 4);
        assert!(DEFAULT_ENABLED_TOOLS.contains(&"retrieval"));
        assert!(DEFAULT_ENABLED_TOOLS.contains(&"code_interpreter"));
        assert!(DEFAULT_ENABLED_TOOLS.contains(&"web_browser"));
        assert!(DEFAULT_ENABLED_TOOLS.contains(&"file_search"));
    }
}
