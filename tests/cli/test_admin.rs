// Tests for init, clear-index, health and show-config

use crate::common::{create_test_services, enqueued, mock_task, UNREACHABLE_URL};
use memex::cli::commands::{clear, config, health, init, ClearArgs, ConfigArgs, HealthArgs, InitArgs};
use memex::cli::OutputFormat;
use mockito::Server;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_init_command() {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/indexes")
        .with_status(202)
        .with_body(enqueued(1, "indexCreation"))
        .create_async()
        .await;
    let _created = mock_task(&mut server, 1, "succeeded", None).await;
    let _settings = server
        .mock("PATCH", "/indexes/files/settings")
        .with_status(202)
        .with_body(enqueued(2, "settingsUpdate"))
        .create_async()
        .await;
    let _applied = mock_task(&mut server, 2, "succeeded", None).await;

    let services = Arc::new(create_test_services(&server.url()));
    let result = init::execute(InitArgs {}, &services, OutputFormat::Json).await;

    assert!(result.is_ok(), "init failed: {:?}", result.err());
}

#[tokio::test]
async fn test_clear_command() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", "/indexes/files/documents")
        .with_status(202)
        .with_body(enqueued(3, "documentDeletion"))
        .expect(1)
        .create_async()
        .await;
    let _task = mock_task(&mut server, 3, "succeeded", None).await;

    let services = Arc::new(create_test_services(&server.url()));
    let result = clear::execute(ClearArgs {}, &services, OutputFormat::Json).await;

    assert!(result.is_ok());
    delete.assert_async().await;
}

#[tokio::test]
async fn test_health_command_up() {
    let mut server = Server::new_async().await;
    let _stats = server
        .mock("GET", "/indexes/files/stats")
        .with_status(200)
        .with_body(json!({"numberOfDocuments": 5, "isIndexing": true}).to_string())
        .create_async()
        .await;

    let services = Arc::new(create_test_services(&server.url()));
    let result = health::execute(HealthArgs {}, &services, OutputFormat::Human).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_health_command_down() {
    let services = Arc::new(create_test_services(UNREACHABLE_URL));

    let result = health::execute(HealthArgs {}, &services, OutputFormat::Json).await;

    assert!(result.unwrap_err().to_string().contains("not running"));
}

#[tokio::test]
async fn test_show_config_command() {
    let services = Arc::new(create_test_services(UNREACHABLE_URL));

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = config::execute(ConfigArgs { all: true }, &services, format).await;
        assert!(result.is_ok());
    }
}

#[tokio::test]
async fn test_clear_command_engine_down_points_at_health() {
    let services = Arc::new(create_test_services(UNREACHABLE_URL));

    let err = clear::execute(ClearArgs {}, &services, OutputFormat::Human)
        .await
        .unwrap_err()
        .to_string();

    assert!(err.starts_with("Failed to clear index"));
    assert!(err.contains("memex health"));
}
