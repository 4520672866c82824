//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod clear;
pub mod completions;
pub mod config;
pub mod health;
pub mod index;
pub mod index_file;
pub mod init;
pub mod search;

// Re-export argument types for use in mod.rs
pub use clear::ClearArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use health::HealthArgs;
pub use index::IndexArgs;
pub use index_file::IndexFileArgs;
pub use init::InitArgs;
pub use search::SearchArgs;

use crate::core::error::MemexError;

/// Error text for a failed command, with a pointer to `memex health`
/// when the engine side is at fault
pub(crate) fn describe_failure(context: &str, err: &MemexError) -> String {
    if err.is_engine_failure() {
        format!("{context}: {err}\n  Check the search engine with 'memex health'")
    } else {
        format!("{context}: {err}")
    }
}
