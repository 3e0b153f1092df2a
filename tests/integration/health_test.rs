//! Integration tests for the health endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::without_database();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].as_str().is_some());
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = TestApp::without_database();

    let response = app.request("GET", "/health", None, Some("not-a-jwt")).await;

    assert_eq!(response.status, StatusCode::OK);
}
