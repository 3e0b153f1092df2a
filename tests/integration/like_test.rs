//! Integration tests for liking posts.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_like_and_list() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (author, _) = app.register("liked", "Liked", "password123").await;
    let (fan, fan_id) = app.register("fan", "Fan", "password123").await;
    let post_id = app.create_post(&author, "likeable", "body").await;

    let response = app
        .request("POST", &format!("/likes/{post_id}"), None, Some(&fan))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["like"]["post_id"], post_id.to_string());
    assert_eq!(response.body["like"]["user_id"], fan_id.to_string());

    let listing = app
        .request("GET", &format!("/likes/{post_id}"), None, Some(&author))
        .await;

    assert_eq!(listing.status, StatusCode::OK);
    let likes = listing.body["likes"].as_array().unwrap();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0]["user"]["username"], "fan");
}

#[tokio::test]
async fn test_like_twice_conflicts() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("repeat", "Repeat", "password123").await;
    let post_id = app.create_post(&token, "once only", "body").await;

    let first = app
        .request("POST", &format!("/likes/{post_id}"), None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", &format!("/likes/{post_id}"), None, Some(&token))
        .await;

    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_message(), "Post already liked");
}

#[tokio::test]
async fn test_like_missing_post() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("lonely", "Lonely", "password123").await;

    let response = app
        .request(
            "POST",
            &format!("/likes/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Post not found");
}

#[tokio::test]
async fn test_unlike() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("fickle", "Fickle", "password123").await;
    let post_id = app.create_post(&token, "loved then not", "body").await;
    app.request("POST", &format!("/likes/{post_id}"), None, Some(&token))
        .await;

    let response = app
        .request("DELETE", &format!("/likes/{post_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Like removed successfully");

    // A second removal has nothing left to remove.
    let again = app
        .request("DELETE", &format!("/likes/{post_id}"), None, Some(&token))
        .await;

    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.error_message(), "Like not found");
}

#[tokio::test]
async fn test_list_likes_empty_is_not_found() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("unloved", "Unloved", "password123").await;
    let post_id = app.create_post(&token, "no likes yet", "body").await;

    let response = app
        .request("GET", &format!("/likes/{post_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "No likes found");
}

#[tokio::test]
async fn test_likes_default_page_size() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (author, _) = app.register("popular", "Popular", "password123").await;
    let post_id = app.create_post(&author, "crowd pleaser", "body").await;

    for fan in ["fan_one", "fan_two", "fan_three"] {
        let (token, _) = app.register(fan, fan, "password123").await;
        let liked = app
            .request("POST", &format!("/likes/{post_id}"), None, Some(&token))
            .await;
        assert_eq!(liked.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", &format!("/likes/{post_id}"), None, Some(&author))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["likes"].as_array().unwrap().len(), 2);
}
