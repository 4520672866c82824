// Index initialization is idempotent

use crate::common::{create_test_services, enqueued, mock_task};
use memex::core::engine::IndexSettings;
use mockito::{Matcher, Server};
use serde_json::json;

async fn mock_settings(server: &mut mockito::ServerGuard, task_uid: u64) -> mockito::Mock {
    let settings = serde_json::to_value(IndexSettings::for_files()).unwrap();
    server
        .mock("PATCH", "/indexes/files/settings")
        .match_body(Matcher::Json(settings))
        .with_status(202)
        .with_body(enqueued(task_uid, "settingsUpdate"))
        .expect(1)
        .create_async()
        .await
}

#[tokio::test]
async fn test_init_creates_then_applies_settings() {
    let mut server = Server::new_async().await;

    let create = server
        .mock("POST", "/indexes")
        .match_body(Matcher::Json(json!({"uid": "files", "primaryKey": "id"})))
        .with_status(202)
        .with_body(enqueued(1, "indexCreation"))
        .expect(1)
        .create_async()
        .await;
    let _created = mock_task(&mut server, 1, "succeeded", None).await;
    let settings = mock_settings(&mut server, 2).await;
    let _applied = mock_task(&mut server, 2, "succeeded", None).await;

    let services = create_test_services(&server.url());
    services.indexer.initialize_index().await.unwrap();

    create.assert_async().await;
    settings.assert_async().await;
}

#[tokio::test]
async fn test_init_existing_index_via_task() {
    let mut server = Server::new_async().await;

    let _create = server
        .mock("POST", "/indexes")
        .with_status(202)
        .with_body(enqueued(1, "indexCreation"))
        .create_async()
        .await;
    let _created = mock_task(
        &mut server,
        1,
        "failed",
        Some(json!({
            "message": "Index `files` already exists.",
            "code": "index_already_exists",
            "type": "invalid_request",
            "link": "https://docs.meilisearch.com/errors#index_already_exists"
        })),
    )
    .await;
    let settings = mock_settings(&mut server, 2).await;
    let _applied = mock_task(&mut server, 2, "succeeded", None).await;

    let services = create_test_services(&server.url());
    services.indexer.initialize_index().await.unwrap();

    settings.assert_async().await;
}

#[tokio::test]
async fn test_init_existing_index_inline_conflict() {
    let mut server = Server::new_async().await;

    let _create = server
        .mock("POST", "/indexes")
        .with_status(409)
        .with_body(
            json!({
                "message": "Index `files` already exists.",
                "code": "index_already_exists",
                "type": "invalid_request"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let settings = mock_settings(&mut server, 7).await;
    let _applied = mock_task(&mut server, 7, "succeeded", None).await;

    let services = create_test_services(&server.url());
    services.indexer.initialize_index().await.unwrap();

    settings.assert_async().await;
}

#[tokio::test]
async fn test_init_other_creation_failure_stops() {
    let mut server = Server::new_async().await;

    let _create = server
        .mock("POST", "/indexes")
        .with_status(400)
        .with_body(
            json!({
                "message": "`files!` is not a valid index uid.",
                "code": "invalid_index_uid"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let settings = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    let err = services.indexer.initialize_index().await.unwrap_err();

    assert!(!err.is_already_exists());
    assert!(err.to_string().contains("400"));
    settings.assert_async().await;
}
