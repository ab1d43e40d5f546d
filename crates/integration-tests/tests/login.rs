//! Integration tests for login and first-run seeding.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use countertill_integration_tests::TestApp;
use countertill_server::seed;

#[tokio::test]
async fn health_returns_ok() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn login_with_seeded_credentials_returns_admin_id() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/login",
            &json!({"username": "admin1", "password": "password1"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["adminId"], "admin1");
}

#[tokio::test]
async fn login_returns_the_right_tenant() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/login",
            &json!({"username": "admin2", "password": "password2"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adminId"], "admin2");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::new();

    let (wrong_status, wrong_body) = app
        .post(
            "/api/login",
            &json!({"username": "admin1", "password": "not-the-password"}),
        )
        .await;
    let (unknown_status, unknown_body) = app
        .post(
            "/api/login",
            &json!({"username": "nobody", "password": "password1"}),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    // Same response for both, to avoid user enumeration.
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "Invalid username or password");
}

#[tokio::test]
async fn login_with_missing_field_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/login", &json!({"username": "admin1"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = app
        .post("/api/login", &json!({"username": "", "password": "password1"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_without_a_body_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.post_empty("/api/login").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn seeding_twice_never_duplicates_admins() {
    let app = TestApp::new();

    // TestApp::new already seeded once; the second run must be a no-op.
    seed::run(app.state().store()).unwrap();

    assert_eq!(app.state().store().admins().all().len(), 2);
}
