//! Front-end facing search envelope.
//!
//! Failures are carried in `error` instead of as a Rust error so that a
//! UI can always render the response.

use serde::Serialize;

use crate::core::document::ScoredDocument;
use crate::core::error::Result;
use crate::core::search::SearchResult;

/// One hit as presented to a user
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub path: String,
    pub content: String,
    /// File extension
    #[serde(rename = "type")]
    pub kind: String,
    /// File name
    pub title: String,
    pub ranking_score: f64,
}

impl From<ScoredDocument> for SearchHit {
    fn from(hit: ScoredDocument) -> Self {
        let document = hit.document;
        Self {
            id: document.id,
            path: document.path,
            content: document.content,
            kind: document.ext,
            title: document.name,
            ranking_score: hit.ranking_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
    pub query: String,
    pub processing_time_ms: u64,
    pub estimated_total_hits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Wrap a search outcome for display
    pub fn from_outcome(query: &str, outcome: Result<SearchResult>) -> Self {
        match outcome {
            Ok(result) => Self {
                hits: result.hits.into_iter().map(SearchHit::from).collect(),
                query: result.query,
                processing_time_ms: result.processing_time_ms,
                estimated_total_hits: result.estimated_total_hits,
                error: None,
            },
            Err(e) => Self {
                hits: Vec::new(),
                query: query.to_string(),
                processing_time_ms: 0,
                estimated_total_hits: 0,
                error: Some(format!("Search failed: {e}")),
            },
        }
    }
}
