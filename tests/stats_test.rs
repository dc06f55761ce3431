//! Tests for the stats endpoint

mod common;

use common::{create_test_server, token_from_url};
use serde_json::json;

#[tokio::test]
async fn test_stats_empty() {
    let (server, _, _) = create_test_server();

    let response = server.get("/stats").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 0);
    assert_eq!(body["confirmed"], 0);
    assert_eq!(body["recent"], 0);
}

#[tokio::test]
async fn test_stats_counts_signups_and_confirmations() {
    let (server, email_sender, _) = create_test_server();

    server
        .post("/subscribe")
        .json(&json!({ "email": "alice@test.com" }))
        .await;
    server
        .post("/subscribe")
        .json(&json!({ "email": "bob@test.com" }))
        .await;

    let token = token_from_url(&email_sender.welcome_url("alice@test.com").unwrap());
    server
        .get("/confirm")
        .add_query_param("token", &token)
        .add_query_param("email", "alice@test.com")
        .await;

    let response = server.get("/stats").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["confirmed"], 1);
    assert_eq!(body["recent"], 2);
}
