//! Configuration management for the dictionary servers.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Default dictionary page URL prefix; the word is appended as the last
/// path segment.
const DEFAULT_BASE_URL: &str = "https://www.ldoceonline.com/dictionary";

/// Browser-style user agent. The dictionary site rejects requests that do
/// not present one.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the dictionary servers.
///
/// This struct contains all configurable aspects of a server process,
/// organized by concern for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Dictionary page fetch configuration.
    pub dictionary: DictionaryConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the outbound dictionary page fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// URL prefix the looked-up word is appended to.
    pub base_url: String,

    /// Fixed user-agent header sent with every request.
    pub user_agent: String,

    /// Request timeout in seconds. No retry on expiry.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ldoce-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            dictionary: DictionaryConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_LDOCE_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_LDOCE_BASE_URL") {
            info!("Dictionary base URL overridden: {}", base_url);
            config.dictionary.base_url = base_url;
        }

        if let Ok(user_agent) = std::env::var("MCP_LDOCE_USER_AGENT") {
            config.dictionary.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("MCP_LDOCE_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.dictionary.timeout_secs = secs;
            }
        }

        config
    }
}
