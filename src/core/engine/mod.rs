//! Search engine access.
//!
//! The engine is an external full-text service reached over HTTP.
//! Writes are asynchronous on its side: each returns a [`TaskInfo`]
//! that must be polled with [`EngineClient::wait_for_task`].

mod client;
mod types;

pub use client::{EngineClient, IndexHandle};
pub use types::{
    EngineErrorBody, IndexSettings, IndexStats, RawSearchResponse, SearchQuery, Task, TaskInfo,
    TaskStatus,
};
