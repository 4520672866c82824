//! memex - local file search
//!
//! Walks a directory tree, turns every eligible file into a document and
//! submits the batch to a local search engine, then queries it.
//!
//! # Architecture
//!
//! - **core**: Domain logic (front-end agnostic)
//!   - config, error, xdg
//!   - policy (extension and directory tables)
//!   - document (record shape and identity)
//!   - engine (HTTP client and wire types)
//!   - indexer (file walking, document building, submission)
//!   - search (queries and the display envelope)
//!   - services (shared container)
//!
//! - **cli**: Command-line adapter (depends on core)

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::document::{Document, ScoredDocument};
pub use core::error::{MemexError, Result};
pub use core::services::Services;
