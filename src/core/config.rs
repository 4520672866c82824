//! Configuration management for memex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The indexing policy tables are compiled in and not configurable.

use crate::core::error::{MemexError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search engine connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Base URL of the engine HTTP API
    #[serde(default = "default_url")]
    pub url: String,

    /// Name of the collection holding file documents
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Bearer key, if the engine runs with a master key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Upper bound for waiting on an asynchronous write task
    #[serde(default = "default_task_timeout_ms")]
    pub task_timeout_ms: u64,

    /// Delay between task status polls
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

/// Indexing configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Ignore patterns applied before any given on the command line
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

// Default value functions
fn default_url() -> String {
    "http://127.0.0.1:58273".to_string()
}

fn default_index_name() -> String {
    "files".to_string()
}

fn default_task_timeout_ms() -> u64 {
    1000
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_request_timeout() -> u64 {
    30
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    1000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            index_name: default_index_name(),
            api_key: None,
            task_timeout_ms: default_task_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl EngineConfig {
    pub fn task_timeout(&self) -> Duration {
        Duration::from_millis(self.task_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_sec)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MemexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MEMEX_CONFIG env var
    /// 2. XDG config file (~/.config/memex/config.toml)
    /// 3. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MEMEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(url) = env::var("MEMEX_URL") {
            self.engine.url = url;
        }
        if let Ok(index) = env::var("MEMEX_INDEX") {
            self.engine.index_name = index;
        }
        if let Ok(key) = env::var("MEMEX_API_KEY") {
            if !key.is_empty() {
                self.engine.api_key = Some(key);
            }
        }
        if let Ok(timeout) = env::var("MEMEX_TASK_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                self.engine.task_timeout_ms = t;
            }
        }
        if let Ok(limit) = env::var("MEMEX_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.engine.url.trim().is_empty() {
            return Err(MemexError::ConfigError(
                "Engine URL must not be empty".to_string(),
            ));
        }

        if self.engine.index_name.trim().is_empty() {
            return Err(MemexError::ConfigError(
                "Index name must not be empty".to_string(),
            ));
        }

        if self.engine.task_timeout_ms == 0 || self.engine.poll_interval_ms == 0 {
            return Err(MemexError::ConfigError(
                "Task timeout and poll interval must be non-zero".to_string(),
            ));
        }

        if self.engine.request_timeout_sec == 0 {
            return Err(MemexError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(MemexError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(MemexError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Engine URL: {}", self.engine.url);
        tracing::info!("  Index: {}", self.engine.index_name);
        tracing::info!(
            "  API key: {}",
            if self.engine.api_key.is_some() {
                "<set>"
            } else {
                "<none>"
            }
        );
        tracing::info!("  Task timeout: {}ms", self.engine.task_timeout_ms);
        tracing::info!(
            "  Ignore patterns: {} patterns",
            self.indexing.ignore_patterns.len()
        );
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
    }
}
