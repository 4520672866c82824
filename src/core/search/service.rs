//! Search against the engine and hit normalization.
//!
//! Ranking happens inside the engine; this module only sends the
//! query and turns raw hits back into [`Document`]s.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::document::{Document, ScoredDocument};
use crate::core::engine::{EngineClient, SearchQuery};
use crate::core::error::Result;

/// Field the engine uses for a hit's relevance when asked for it
const RANKING_SCORE_FIELD: &str = "_rankingScore";

/// Decoded search outcome
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    /// Hits in engine order
    pub hits: Vec<ScoredDocument>,
    pub query: String,
    pub processing_time_ms: u64,
    /// Engine estimate, may exceed `hits.len()`
    pub estimated_total_hits: u64,
}

/// Query pipeline
pub struct SearchService {
    engine: Arc<EngineClient>,
    default_limit: usize,
    max_limit: usize,
}

impl SearchService {
    pub fn new(engine: Arc<EngineClient>, default_limit: usize, max_limit: usize) -> Self {
        Self {
            engine,
            default_limit,
            max_limit,
        }
    }

    /// Search the file collection
    ///
    /// A blank query returns an empty result without contacting the
    /// engine. A `limit` of zero means the configured default.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResult> {
        if query.trim().is_empty() {
            return Ok(SearchResult {
                query: query.to_string(),
                ..Default::default()
            });
        }

        let limit = if limit == 0 { self.default_limit } else { limit }.min(self.max_limit);

        let request = SearchQuery {
            q: query.to_string(),
            limit,
            show_ranking_score: true,
        };
        let raw = self.engine.index().search(&request).await?;

        let hits = decode_hits(raw.hits);
        tracing::debug!(
            "Search '{}' returned {} hits in {}ms",
            query,
            hits.len(),
            raw.processing_time_ms
        );

        Ok(SearchResult {
            hits,
            query: if raw.query.is_empty() {
                query.to_string()
            } else {
                raw.query
            },
            processing_time_ms: raw.processing_time_ms,
            estimated_total_hits: raw.estimated_total_hits.unwrap_or_default(),
        })
    }
}

/// Decode raw hits, dropping any that do not fit the document shape
///
/// Lossy on purpose: the engine's stored records are authoritative and
/// a malformed hit must not fail the whole search.
pub fn decode_hits(raw: Vec<Value>) -> Vec<ScoredDocument> {
    raw.into_iter()
        .filter_map(|mut hit| {
            let ranking_score = hit
                .as_object_mut()
                .and_then(|fields| fields.remove(RANKING_SCORE_FIELD))
                .and_then(|score| score.as_f64())
                .unwrap_or_default();

            match serde_json::from_value::<Document>(hit) {
                Ok(document) => Some(ScoredDocument {
                    document,
                    ranking_score,
                }),
                Err(e) => {
                    tracing::debug!("Dropping undecodable hit: {}", e);
                    None
                }
            }
        })
        .collect()
}
