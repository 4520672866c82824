//! Wire types for the search engine HTTP API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::core::error::{MemexError, Result, INDEX_ALREADY_EXISTS};

/// Lifecycle state of an asynchronous engine task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Enqueued,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Whether the engine will no longer change this task
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Succeeded | TaskStatus::Failed | TaskStatus::Canceled
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Enqueued => "enqueued",
            TaskStatus::Processing => "processing",
            TaskStatus::Succeeded => "succeeded",
            TaskStatus::Failed => "failed",
            TaskStatus::Canceled => "canceled",
            TaskStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Reference returned immediately by every write
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub task_uid: u64,
    #[serde(default)]
    pub index_uid: Option<String>,
    pub status: TaskStatus,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Error reported by the engine, either inline or inside a task
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Full task record from `GET /tasks/{uid}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub uid: u64,
    #[serde(default)]
    pub index_uid: Option<String>,
    pub status: TaskStatus,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub error: Option<EngineErrorBody>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl Task {
    /// Interpret the task outcome
    ///
    /// `succeeded` is success. `failed` and `canceled` become errors
    /// carrying the engine message; a task failing with
    /// `index_already_exists` is reported as [`MemexError::AlreadyExists`].
    /// Any other status means the wait ended before the task did, so
    /// the outcome is unknown.
    pub fn into_result(self) -> Result<Task> {
        match self.status {
            TaskStatus::Succeeded => Ok(self),
            TaskStatus::Failed | TaskStatus::Canceled => {
                let error = self.error.unwrap_or_default();
                let message = if error.message.is_empty() {
                    format!("task {} {}", self.uid, self.status)
                } else {
                    error.message
                };
                if error.code.as_deref() == Some(INDEX_ALREADY_EXISTS) {
                    Err(MemexError::AlreadyExists(message))
                } else {
                    Err(MemexError::EngineTaskFailed(message))
                }
            }
            status => Err(MemexError::EngineTaskTimeout {
                task_uid: self.uid,
                status: status.to_string(),
            }),
        }
    }
}

/// Collection settings applied by `init`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSettings {
    pub searchable_attributes: Vec<String>,
    pub filterable_attributes: Vec<String>,
    pub sortable_attributes: Vec<String>,
    pub displayed_attributes: Vec<String>,
}

impl IndexSettings {
    /// Settings for the file collection
    pub fn for_files() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            searchable_attributes: owned(&["name", "title", "content", "tags", "path"]),
            filterable_attributes: owned(&["ext", "dir", "mod_time", "size", "tags"]),
            sortable_attributes: owned(&["mod_time", "size", "name"]),
            displayed_attributes: owned(&[
                "id", "path", "name", "dir", "ext", "size", "mod_time", "title", "tags",
            ]),
        }
    }
}

/// Collection statistics
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub number_of_documents: u64,
    #[serde(default)]
    pub is_indexing: bool,
    #[serde(default)]
    pub field_distribution: HashMap<String, u64>,
}

/// Body of `POST /indexes/{uid}/search`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: String,
    pub limit: usize,
    pub show_ranking_score: bool,
}

/// Undecoded search reply
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResponse {
    #[serde(default)]
    pub hits: Vec<serde_json::Value>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub processing_time_ms: u64,
    #[serde(default)]
    pub estimated_total_hits: Option<u64>,
}
