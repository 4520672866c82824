//! Unified service container for memex
//!
//! Owns the one engine client and hands it to every component that
//! talks to the engine.

use crate::core::config::Config;
use crate::core::engine::EngineClient;
use crate::core::error::Result;
use crate::core::indexer::IndexingPipeline;
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// Built once during process setup, before any concurrent use, and
/// shared by cloning.
#[derive(Clone)]
pub struct Services {
    /// Shared engine connection
    pub engine: Arc<EngineClient>,

    /// Indexing pipeline
    pub indexer: Arc<IndexingPipeline>,

    /// Query pipeline
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let engine = Arc::new(EngineClient::new(&config.engine)?);

        let indexer = Arc::new(IndexingPipeline::new(Arc::clone(&engine)));

        let search = Arc::new(SearchService::new(
            Arc::clone(&engine),
            config.search.default_limit,
            config.search.max_limit,
        ));

        Ok(Self {
            engine,
            indexer,
            search,
            config: Arc::new(config),
        })
    }

    /// Ignore patterns from configuration followed by `extra`
    pub fn ignore_patterns(&self, extra: &[String]) -> Vec<String> {
        self.config
            .indexing
            .ignore_patterns
            .iter()
            .chain(extra)
            .cloned()
            .collect()
    }
}
