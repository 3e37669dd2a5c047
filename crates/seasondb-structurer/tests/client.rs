//! Integration tests for `CompletionClient` and the structuring pipeline,
//! using wiremock to stand in for the completion endpoint.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use seasondb_structurer::{run_structurer, CompletionClient, StructurerError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CompletionClient {
    CompletionClient::with_base_url("sk-test", "gpt-4o-mini", base_url)
        .expect("client construction should not fail")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("seasondb-structurer-{}-{name}", std::process::id()))
}

fn chat_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn complete_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("[]")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let content = client.complete("extract please").await.expect("should complete");
    assert_eq!(content, "[]");
}

#[tokio::test]
async fn complete_surfaces_api_errors_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.complete("prompt").await.expect_err("401 should error");

    match err {
        StructurerError::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn run_structurer_extracts_the_1995_season() {
    let server = MockServer::start().await;

    // Prose-wrapped reply: the array must still be located and parsed.
    let reply = r#"Here is the data: [{"season": 1995, "wins": 12, "losses": 4, "playoffs": "Won Super Bowl XXX"}] Let me know if you need more."#;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(reply)))
        .mount(&server)
        .await;

    let blob_path = temp_path("blob-1995.txt");
    std::fs::write(
        &blob_path,
        "1995 season: Cowboys finished 12-4, won Super Bowl XXX.",
    )
    .expect("blob should write");
    let out_path = temp_path("structured-1995.json");

    let now = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    let client = test_client(&server.uri());
    let records = run_structurer(
        &client,
        &blob_path,
        "https://example.com/cowboys",
        now,
        12_000,
        &out_path,
    )
    .await
    .expect("structuring should succeed");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.season, 1995);
    assert_eq!(record.wins, 12);
    assert_eq!(record.losses, 4);
    assert_eq!(record.ties, 0);
    assert!(record.playoffs.contains("Super Bowl"));
    assert_eq!(record.team, "Dallas Cowboys");
    assert_eq!(record.source_url, "https://example.com/cowboys");
    assert_eq!(record.extracted_at, now);

    // The artifact on disk is keyed under "records".
    let artifact: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).expect("artifact should exist"))
            .expect("artifact should parse");
    assert_eq!(artifact["records"][0]["season"], 1995);

    std::fs::remove_file(&blob_path).ok();
    std::fs::remove_file(&out_path).ok();
}

#[tokio::test]
async fn run_structurer_aborts_on_commentary_only_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(
            "I could not find season data in the provided text.",
        )))
        .mount(&server)
        .await;

    let blob_path = temp_path("blob-empty.txt");
    std::fs::write(&blob_path, "nothing useful").expect("blob should write");
    let out_path = temp_path("structured-empty.json");

    let now = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    let client = test_client(&server.uri());
    let err = run_structurer(&client, &blob_path, "https://example.com", now, 12_000, &out_path)
        .await
        .expect_err("commentary-only reply should abort");

    assert!(matches!(err, StructurerError::Extraction(_)));
    assert!(!out_path.exists(), "no artifact should be written on failure");

    std::fs::remove_file(&blob_path).ok();
}
