mod common;

use alias_shortener::domain::repositories::UrlGetter;
use serde_json::json;

#[tokio::test]
async fn test_save_with_client_alias() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/")
        .json(&json!({
            "url": "https://example.com/very/long/path",
            "alias": "docs"
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "docs" }));

    assert_eq!(
        repo.get_url("docs").await.unwrap(),
        "https://example.com/very/long/path"
    );
}

#[tokio::test]
async fn test_save_generates_six_char_alias() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/very/long/path" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "OK");

    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));

    assert_eq!(
        repo.get_url(alias).await.unwrap(),
        "https://example.com/very/long/path"
    );
}

#[tokio::test]
async fn test_save_empty_alias_is_generated() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["alias"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_save_empty_body() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "request body is empty" }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_save_malformed_body() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/").text("{\"url\": ").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "Error",
        "error": "failed to decode request body"
    }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_save_missing_url() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/").json(&json!({ "alias": "lonely" })).await;

    response.assert_json(&json!({
        "status": "Error",
        "error": "field url is a required field"
    }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_save_invalid_url_persists_nothing() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/").json(&json!({ "url": "not-a-url" })).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "Error",
        "error": "field url is not a valid URL"
    }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_save_duplicate_alias_keeps_first_url() {
    let (server, repo) = common::create_test_server();

    server
        .post("/")
        .json(&json!({ "url": "https://first.com", "alias": "same" }))
        .await
        .assert_json(&json!({ "status": "OK", "alias": "same" }));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://second.com", "alias": "same" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "url already exists" }));

    assert_eq!(repo.get_url("same").await.unwrap(), "https://first.com/");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_save_same_url_twice_gets_two_aliases() {
    let (server, repo) = common::create_test_server();

    let first = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["alias"], second["alias"]);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_save_url_with_line_break_still_redirects() {
    let (server, repo) = common::create_test_server();

    server
        .post("/")
        .json(&json!({ "url": "https://example.com/a\nb", "alias": "nl" }))
        .await
        .assert_json(&json!({ "status": "OK", "alias": "nl" }));

    assert_eq!(repo.get_url("nl").await.unwrap(), "https://example.com/ab");

    let response = server.get("/nl").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/ab");
}

#[tokio::test]
async fn test_save_non_ascii_url_is_percent_encoded() {
    let (server, _repo) = common::create_test_server();

    server
        .post("/")
        .json(&json!({ "url": "https://example.com/café", "alias": "cafe" }))
        .await
        .assert_json(&json!({ "status": "OK", "alias": "cafe" }));

    let response = server.get("/cafe").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}
