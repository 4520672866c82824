//! File indexing module.
//!
//! Handles directory traversal and document submission. Key features:
//!
//! - Ignore patterns (absolute path prefixes and base-name globs)
//!   that take precedence over the built-in policy
//! - Whole-subtree pruning for ignored and hidden directories
//! - Metadata-only documents for binary and media extensions
//! - One batched write per directory, awaited to completion

pub mod pipeline;
pub mod walker;

pub use pipeline::{collect_documents, document_for_file, IndexReport, IndexingPipeline};
pub use walker::{FileWalker, FilterDecision, IgnorePattern, PathFilter};
