// Engine client behavior at the HTTP boundary

use crate::common::{create_test_services, mock_task, task_body, UNREACHABLE_URL};
use memex::core::engine::TaskStatus;
use memex::core::error::MemexError;
use mockito::Server;
use serde_json::json;

#[tokio::test]
async fn test_wait_polls_until_terminal() {
    let mut server = Server::new_async().await;

    // Mocks with hits outstanding are served first, in creation order
    let processing = server
        .mock("GET", "/tasks/11")
        .with_status(200)
        .with_body(task_body(11, "processing", None))
        .expect(2)
        .create_async()
        .await;
    let _done = mock_task(&mut server, 11, "succeeded", None).await;

    let services = create_test_services(&server.url());
    let task = services.engine.wait_for_task(11).await.unwrap();

    assert_eq!(task.status, TaskStatus::Succeeded);
    processing.assert_async().await;
}

#[tokio::test]
async fn test_health_reports_running_engine() {
    let mut server = Server::new_async().await;
    let _stats = server
        .mock("GET", "/indexes/files/stats")
        .with_status(200)
        .with_body(
            json!({
                "numberOfDocuments": 42,
                "isIndexing": false,
                "fieldDistribution": {"path": 42}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    assert!(services.engine.health_check().await);

    let stats = services.engine.index().stats().await.unwrap();
    assert_eq!(stats.number_of_documents, 42);
    assert_eq!(stats.field_distribution.get("path"), Some(&42));
}

#[tokio::test]
async fn test_unreachable_engine() {
    let services = create_test_services(UNREACHABLE_URL);

    assert!(!services.engine.health_check().await);
    let err = services.indexer.clear_index().await.unwrap_err();
    assert!(matches!(err, MemexError::EngineUnreachable(_)));
}

#[tokio::test]
async fn test_malformed_reply_is_decode_error() {
    let mut server = Server::new_async().await;
    let _task = server
        .mock("GET", "/tasks/1")
        .with_status(200)
        .with_body("<html>proxy error</html>")
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    let err = services.engine.get_task(1).await.unwrap_err();

    assert!(matches!(err, MemexError::DecodeError(_)));
}
