//! Core domain logic (protocol-agnostic)
//!
//! This module contains all indexing and search logic, independent
//! of the command line front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling
//! - **document**: Document model and identity
//! - **policy**: Built-in directory and extension tables
//! - **engine**: Search engine HTTP client
//! - **indexer**: Directory walking and indexing pipeline
//! - **search**: Query pipeline and hit decoding
//! - **services**: Unified service container

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod indexer;
pub mod policy;
pub mod search;
pub mod services;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use document::{Document, ScoredDocument};
pub use error::{MemexError, Result};
pub use services::Services;
