//! Integration tests for registration, login, and token handling.

use http::StatusCode;

use crate::helpers::{TestApp, forge_token};

#[tokio::test]
async fn test_register_success() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "name": "Alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["user"]["username"], "alice");
    assert_eq!(response.body["user"]["name"], "Alice");
    assert!(
        response.body["user"].get("password_hash").is_none(),
        "password hash must never leave the server"
    );
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.register("bob", "Bob", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "username": "bob",
                "name": "Bobby",
                "password": "password456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_message(), "Username already taken");
}

#[tokio::test]
async fn test_register_case_variant_username_conflicts() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.register("Grace", "Grace", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "username": "grace",
                "name": "Grace Again",
                "password": "password456",
            })),
            None,
        )
        .await;

    // Usernames differing only by case are the same username.
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_message(), "Username already taken");
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::without_database();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "username": "carol",
                "name": "Carol",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error_message(),
        "Password must be at least 8 characters"
    );
}

#[tokio::test]
async fn test_register_short_username() {
    let app = TestApp::without_database();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "username": "ab",
                "name": "Abe",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error_message(),
        "Username must be between 3 and 30 characters"
    );
}

#[tokio::test]
async fn test_login_success() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.register("dave", "Dave", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "dave",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["user"]["username"], "dave");
}

#[tokio::test]
async fn test_login_with_case_variant_username() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.register("Heidi", "Heidi", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "heidi",
                "password": "password123",
            })),
            None,
        )
        .await;

    // The stored casing is preserved; the lookup ignores case.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "Heidi");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.register("erin", "Erin", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "erin",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user_same_message() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    // Indistinguishable from a wrong password.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Invalid username or password");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::without_database();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({"username": "frank"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Password is required");
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = TestApp::without_database();

    let response = app.request("GET", "/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Unauthorized");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::without_database();

    let response = app
        .request("GET", "/users/me", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Unauthorized");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::without_database();
    let secret = parlor_core::config::AuthConfig::default().jwt_secret;
    let token = forge_token(&secret, -3600);

    let response = app.request("GET", "/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Unauthorized");
}

#[tokio::test]
async fn test_token_with_wrong_secret_rejected() {
    let app = TestApp::without_database();
    let token = forge_token("some-other-secret", 3600);

    let response = app.request("GET", "/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Unauthorized");
}
