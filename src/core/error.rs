//! Error types and error handling for memex.
//!
//! This module defines the error types used throughout the
//! application. Per-entry failures during a directory walk never
//! surface here; they are logged and skipped by the walker.

use thiserror::Error;

/// Result type alias for memex operations
pub type Result<T> = std::result::Result<T, MemexError>;

/// Engine error code for a collection that already exists
pub const INDEX_ALREADY_EXISTS: &str = "index_already_exists";

/// Main error type for memex
#[derive(Error, Debug)]
pub enum MemexError {
    #[error("File extension not allowed: {0}")]
    InvalidExtension(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Search engine unreachable: {0}")]
    EngineUnreachable(String),

    #[error("Engine task failed: {0}")]
    EngineTaskFailed(String),

    #[error("Engine task {task_uid} did not finish in time (last status: {status})")]
    EngineTaskTimeout { task_uid: u64, status: String },

    #[error("Index already exists: {0}")]
    AlreadyExists(String),

    #[error("Engine request failed ({status}): {message}")]
    EngineRequest {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to decode document: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MemexError {
    /// Build an error from an engine error code and message
    ///
    /// The code is the engine's machine-readable classification; the
    /// message text is never inspected.
    pub fn from_engine_code(status: u16, code: Option<String>, message: String) -> Self {
        match code.as_deref() {
            Some(INDEX_ALREADY_EXISTS) => MemexError::AlreadyExists(message),
            _ => MemexError::EngineRequest {
                status,
                code,
                message,
            },
        }
    }

    /// Check if this is the collection-creation idempotency signal
    pub fn is_already_exists(&self) -> bool {
        matches!(self, MemexError::AlreadyExists(_))
    }

    /// Check if the error came from the engine boundary
    pub fn is_engine_failure(&self) -> bool {
        matches!(
            self,
            MemexError::EngineUnreachable(_)
                | MemexError::EngineTaskFailed(_)
                | MemexError::EngineTaskTimeout { .. }
                | MemexError::EngineRequest { .. }
        )
    }

    /// Check if a task outcome is still unknown
    pub fn is_timeout(&self) -> bool {
        matches!(self, MemexError::EngineTaskTimeout { .. })
    }
}

impl From<reqwest::Error> for MemexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            MemexError::EngineUnreachable(err.to_string())
        } else if err.is_decode() {
            MemexError::DecodeError(err.to_string())
        } else {
            MemexError::EngineRequest {
                status: err.status().map(|s| s.as_u16()).unwrap_or_default(),
                code: None,
                message: err.to_string(),
            }
        }
    }
}
