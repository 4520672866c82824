//! Document model.
//!
//! A [`Document`] is the unit submitted to the search engine: one
//! record per indexed file. Its `id` is derived from the path alone so
//! that re-indexing a file replaces the previous record instead of
//! adding a duplicate.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single indexed file
///
/// Every field has a serde default: the engine only returns its
/// displayed attributes, so hits arrive without `content` and friends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Hex SHA-256 of `path`
    pub id: String,

    /// Path as given to the indexer
    pub path: String,

    /// Base name, extension included
    pub name: String,

    /// Parent directory
    pub dir: String,

    /// Extension with its leading dot (e.g. `.go`), empty if none
    pub ext: String,

    /// Size in bytes
    pub size: i64,

    /// Modification time, seconds since epoch
    pub mod_time: i64,

    /// Full text, empty for metadata-only extensions
    pub content: String,

    /// Hex SHA-256 of `content`
    pub content_hash: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Construction time, seconds since epoch
    pub indexed_at: i64,
}

impl Document {
    /// Build a document for one file
    ///
    /// Pure apart from `indexed_at`, which records the wall clock.
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        dir: impl Into<String>,
        ext: impl Into<String>,
        size: i64,
        mod_time: i64,
        content: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let content = content.into();

        Self {
            id: document_id(&path),
            content_hash: content_hash(&content),
            path,
            name: name.into(),
            dir: dir.into(),
            ext: ext.into(),
            size,
            mod_time,
            content,
            description: None,
            indexed_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Stable document identifier for a path
///
/// Hex output only uses `[0-9a-f]`, which the engine accepts as a
/// primary key.
pub fn document_id(path: &str) -> String {
    hex::encode(Sha256::digest(path.as_bytes()))
}

/// Content digest; the empty string still hashes
pub fn content_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// A document returned by a search together with its relevance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Document,

    /// Engine ranking score in `[0, 1]`, zero when absent
    pub ranking_score: f64,
}
