//! Integration tests for user profile and listing.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_get_me() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (_, user_id) = app.register("selfie", "Selfie", "password123").await;
    let token = app.login("selfie", "password123").await;

    let response = app.request("GET", "/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], user_id.to_string());
    assert_eq!(response.body["user"]["username"], "selfie");
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_list_users_ordered_by_name() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("u_carol", "Carol", "password123").await;
    app.register("u_alice", "Alice", "password123").await;
    app.register("u_bob", "Bob", "password123").await;

    let response = app
        .request("GET", "/users?limit=10", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["users"].as_array().unwrap();
    let names: Vec<&str> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_list_users_default_page_size() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("u_one", "One", "password123").await;
    app.register("u_two", "Two", "password123").await;
    app.register("u_three", "Three", "password123").await;

    let response = app.request("GET", "/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["users"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_deleted_user_sees_not_found() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, user_id) = app.register("fleeting", "Fleeting", "password123").await;

    // The token outlives the account.
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to delete user row");

    let me = app.request("GET", "/users/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::NOT_FOUND);
    assert_eq!(me.error_message(), "User not found");

    let listing = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(listing.status, StatusCode::NOT_FOUND);
    assert_eq!(listing.error_message(), "No users found");
}
