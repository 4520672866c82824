// Query pipeline against a mocked engine

use crate::common::{create_test_services, TestRepo, UNREACHABLE_URL};
use memex::core::indexer::document_for_file;
use memex::core::search::SearchResponse;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_blank_query_skips_engine() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    for query in ["", "   ", "\t\n"] {
        let result = services.search.search(query, 10).await.unwrap();
        assert!(result.hits.is_empty());
        assert_eq!(result.estimated_total_hits, 0);
    }

    search.assert_async().await;
}

#[tokio::test]
async fn test_indexed_document_comes_back_intact() {
    let repo = TestRepo::with_files(&[("src/pool.rs", "pub struct ConnectionPool;")]);
    let path = repo.path().join("src/pool.rs");
    let document = document_for_file(&path, true).unwrap();

    let mut hit = serde_json::to_value(&document).unwrap();
    hit["_rankingScore"] = json!(0.93);

    let mut server = Server::new_async().await;
    let _search = server
        .mock("POST", "/indexes/files/search")
        .match_body(Matcher::Json(json!({
            "q": "ConnectionPool",
            "limit": 10,
            "showRankingScore": true
        })))
        .with_status(200)
        .with_body(
            json!({
                "hits": [hit],
                "query": "ConnectionPool",
                "processingTimeMs": 2,
                "limit": 10,
                "offset": 0,
                "estimatedTotalHits": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    let result = services.search.search("ConnectionPool", 0).await.unwrap();

    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].document, document);
    assert!((result.hits[0].ranking_score - 0.93).abs() < 1e-9);
    assert_eq!(result.processing_time_ms, 2);
    assert_eq!(result.estimated_total_hits, 1);
}

#[tokio::test]
async fn test_limit_is_capped() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("POST", "/indexes/files/search")
        .match_body(Matcher::PartialJson(json!({"limit": 1000})))
        .with_status(200)
        .with_body(json!({"hits": [], "query": "x", "processingTimeMs": 0}).to_string())
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    let result = services.search.search("x", 50_000).await.unwrap();

    assert!(result.hits.is_empty());
    search.assert_async().await;
}

#[tokio::test]
async fn test_displayed_subset_decodes() {
    let mut server = Server::new_async().await;
    let _search = server
        .mock("POST", "/indexes/files/search")
        .with_status(200)
        .with_body(
            json!({
                "hits": [
                    {"id": "a1", "path": "/p/main.go", "name": "main.go", "ext": ".go",
                     "size": 12, "mod_time": 1700000000, "_rankingScore": 0.5},
                    {"id": "b2", "path": "/p/README.md", "name": "README.md", "ext": ".md",
                     "_rankingScore": 0.25}
                ],
                "query": "main",
                "processingTimeMs": 1,
                "estimatedTotalHits": 2
            })
            .to_string(),
        )
        .create_async()
        .await;

    let services = create_test_services(&server.url());
    let response = SearchResponse::from_outcome("main", services.search.search("main", 5).await);

    assert!(response.error.is_none());
    assert_eq!(response.hits.len(), 2);
    assert_eq!(response.hits[0].title, "main.go");
    assert_eq!(response.hits[0].kind, ".go");
    assert!(response.hits[0].content.is_empty());
    assert_eq!(response.hits[1].ranking_score, 0.25);
}

#[tokio::test]
async fn test_engine_failure_lands_in_envelope() {
    let services = create_test_services(UNREACHABLE_URL);
    let response = SearchResponse::from_outcome("main", services.search.search("main", 5).await);

    assert!(response.hits.is_empty());
    assert_eq!(response.query, "main");
    let error = response.error.unwrap();
    assert!(error.starts_with("Search failed: "));
}
