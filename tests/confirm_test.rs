//! Tests for the confirmation endpoint

mod common;

use common::{create_test_server, token_from_url};
use lumeo_waitlist::SignupStore;
use serde_json::json;

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("Location header is not valid UTF-8")
        .to_string()
}

/// Test: visiting the emailed link confirms the signup and redirects
#[tokio::test]
async fn test_confirm_happy_path() {
    let (server, email_sender, store) = create_test_server();

    server
        .post("/subscribe")
        .json(&json!({ "email": "alice@test.com" }))
        .await;
    let url = email_sender.welcome_url("alice@test.com").unwrap();
    let token = token_from_url(&url);

    let response = server
        .get("/confirm")
        .add_query_param("token", &token)
        .add_query_param("email", "alice@test.com")
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(location(&response), "/confirmed");

    let signup = store.find_by_email("alice@test.com").unwrap().unwrap();
    assert!(signup.confirmed);
    assert!(signup.confirmed_at.is_some());
    assert_eq!(email_sender.confirmed_count(), 1);
}

/// Test: missing parameters redirect to the invalid-link page
#[tokio::test]
async fn test_confirm_missing_params() {
    let (server, _, _) = create_test_server();

    let response = server.get("/confirm").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(location(&response), "/early-access?error=invalid_link");

    let response = server
        .get("/confirm")
        .add_query_param("token", "abc")
        .await;
    assert_eq!(location(&response), "/early-access?error=invalid_link");

    let response = server
        .get("/confirm")
        .add_query_param("email", "alice@test.com")
        .await;
    assert_eq!(location(&response), "/early-access?error=invalid_link");
}

/// Test: a token that does not match the stored one never confirms
#[tokio::test]
async fn test_confirm_wrong_token() {
    let (server, email_sender, store) = create_test_server();

    server
        .post("/subscribe")
        .json(&json!({ "email": "alice@test.com" }))
        .await;
    // A second valid signup must not make someone else's token work
    server
        .post("/subscribe")
        .json(&json!({ "email": "bob@test.com" }))
        .await;
    let bob_token = token_from_url(&email_sender.welcome_url("bob@test.com").unwrap());

    let response = server
        .get("/confirm")
        .add_query_param("token", &bob_token)
        .add_query_param("email", "alice@test.com")
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(location(&response), "/early-access?error=invalid_token");

    let signup = store.find_by_email("alice@test.com").unwrap().unwrap();
    assert!(!signup.confirmed);
    assert_eq!(email_sender.confirmed_count(), 0);
}

/// Test: a consumed token is rejected and no second confirmation email goes out
#[tokio::test]
async fn test_confirm_is_single_use() {
    let (server, email_sender, _) = create_test_server();

    server
        .post("/subscribe")
        .json(&json!({ "email": "alice@test.com" }))
        .await;
    let token = token_from_url(&email_sender.welcome_url("alice@test.com").unwrap());

    let first = server
        .get("/confirm")
        .add_query_param("token", &token)
        .add_query_param("email", "alice@test.com")
        .await;
    assert_eq!(location(&first), "/confirmed");

    let second = server
        .get("/confirm")
        .add_query_param("token", &token)
        .add_query_param("email", "alice@test.com")
        .await;
    assert_eq!(location(&second), "/early-access?error=invalid_token");

    assert_eq!(email_sender.confirmed_count(), 1);
}

/// Test: the emailed address confirms regardless of casing
#[tokio::test]
async fn test_confirm_case_normalization() {
    let (server, email_sender, store) = create_test_server();

    server
        .post("/subscribe")
        .json(&json!({ "email": "alice@test.com" }))
        .await;
    let token = token_from_url(&email_sender.welcome_url("alice@test.com").unwrap());

    let response = server
        .get("/confirm")
        .add_query_param("token", &token)
        .add_query_param("email", "Alice@Test.COM")
        .await;

    assert_eq!(location(&response), "/confirmed");
    assert!(store.find_by_email("alice@test.com").unwrap().unwrap().confirmed);
}

/// Test: confirming an unknown email is an invalid-token redirect, not a crash
#[tokio::test]
async fn test_confirm_unknown_email() {
    let (server, _, _) = create_test_server();

    let response = server
        .get("/confirm")
        .add_query_param("token", "whatever")
        .add_query_param("email", "nobody@test.com")
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(location(&response), "/early-access?error=invalid_token");
}
