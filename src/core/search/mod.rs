//! Search module.
//!
//! Sends queries to the engine and normalizes hits back into
//! documents, plus the response envelope handed to front ends.

mod response;
mod service;

pub use response::{SearchHit, SearchResponse};
pub use service::{decode_hits, SearchResult, SearchService};
