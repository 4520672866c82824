// Test helper functions

use memex::core::config::{Config, EngineConfig};
use memex::core::services::Services;
use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

/// Nothing listens on port 1
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Configuration pointed at `url` with a short task wait bound
#[allow(dead_code)] // Used in integration tests
pub fn test_config(url: &str) -> Config {
    Config {
        engine: EngineConfig {
            url: url.to_string(),
            task_timeout_ms: 300,
            poll_interval_ms: 10,
            request_timeout_sec: 5,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Services talking to the engine at `url`
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(url: &str) -> Services {
    Services::new(test_config(url)).expect("Failed to create services")
}

/// Reply body of a write the engine accepted
#[allow(dead_code)]
pub fn enqueued(task_uid: u64, kind: &str) -> String {
    json!({
        "taskUid": task_uid,
        "indexUid": "files",
        "status": "enqueued",
        "type": kind,
        "enqueuedAt": "2024-01-01T00:00:00Z"
    })
    .to_string()
}

/// Body of `GET /tasks/{uid}`
#[allow(dead_code)]
pub fn task_body(uid: u64, status: &str, error: Option<Value>) -> String {
    let mut task = json!({
        "uid": uid,
        "indexUid": "files",
        "status": status,
        "type": "documentAdditionOrUpdate",
        "duration": "PT0.01S"
    });
    if let Some(error) = error {
        task["error"] = error;
    }
    task.to_string()
}

/// Mock the status endpoint of one task
#[allow(dead_code)]
pub async fn mock_task(
    server: &mut ServerGuard,
    uid: u64,
    status: &str,
    error: Option<Value>,
) -> Mock {
    server
        .mock("GET", format!("/tasks/{uid}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(task_body(uid, status, error))
        .create_async()
        .await
}
