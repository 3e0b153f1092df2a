//! Integration tests for post creation, listing, and deletion.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::{TestApp, ghost_token};

#[tokio::test]
async fn test_create_post() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, user_id) = app.register("writer", "Writer", "password123").await;

    let response = app
        .request(
            "POST",
            "/posts",
            Some(serde_json::json!({
                "title": "First post",
                "content": "Hello parlor",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["post"]["title"], "First post");
    assert_eq!(response.body["post"]["content"], "Hello parlor");
    assert_eq!(response.body["post"]["user_id"], user_id.to_string());
}

#[tokio::test]
async fn test_create_post_missing_fields() {
    let app = TestApp::without_database();
    let token = ghost_token();
    let cases = [
        serde_json::json!({}),
        serde_json::json!({"title": "only a title"}),
        serde_json::json!({"title": "a title", "content": ""}),
    ];

    for body in cases {
        let response = app
            .request("POST", "/posts", Some(body), Some(&token))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_message(), "Title and Content are required");
    }
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::without_database();

    let response = app
        .request(
            "POST",
            "/posts",
            Some(serde_json::json!({"title": "t", "content": "c"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_posts_defaults_to_two_newest_first() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("prolific", "Prolific", "password123").await;
    app.create_post(&token, "one", "body").await;
    app.create_post(&token, "two", "body").await;
    app.create_post(&token, "three", "body").await;

    let response = app.request("GET", "/posts", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let posts = response.body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "three");
    assert_eq!(posts[1]["title"], "two");
    assert_eq!(posts[0]["author"]["username"], "prolific");
}

#[tokio::test]
async fn test_list_posts_second_page() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("pager", "Pager", "password123").await;
    app.create_post(&token, "one", "body").await;
    app.create_post(&token, "two", "body").await;
    app.create_post(&token, "three", "body").await;

    let response = app
        .request("GET", "/posts?page=2&limit=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let posts = response.body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "one");
}

#[tokio::test]
async fn test_list_posts_bad_query_params_use_defaults() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("sloppy", "Sloppy", "password123").await;
    app.create_post(&token, "one", "body").await;
    app.create_post(&token, "two", "body").await;
    app.create_post(&token, "three", "body").await;

    let response = app
        .request("GET", "/posts?page=abc&limit=-7", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["posts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_posts_empty_is_not_found() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("reader", "Reader", "password123").await;

    let response = app.request("GET", "/posts", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "No posts found");
}

#[tokio::test]
async fn test_page_past_the_end_is_not_found() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("walker", "Walker", "password123").await;
    app.create_post(&token, "only", "body").await;

    let response = app
        .request("GET", "/posts?page=99", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "No posts found");
}

#[tokio::test]
async fn test_my_posts_excludes_other_authors() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (mine, _) = app.register("author_a", "Author A", "password123").await;
    let (other, _) = app.register("author_b", "Author B", "password123").await;
    app.create_post(&mine, "a post", "body").await;
    app.create_post(&other, "b post", "body").await;

    let response = app.request("GET", "/posts/me", None, Some(&mine)).await;

    assert_eq!(response.status, StatusCode::OK);
    let posts = response.body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "a post");
    assert_eq!(posts[0]["author"]["username"], "author_a");
}

#[tokio::test]
async fn test_delete_own_post() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("cleaner", "Cleaner", "password123").await;
    let post_id = app.create_post(&token, "doomed", "body").await;

    let response = app
        .request("DELETE", &format!("/posts/{post_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Post deleted successfully");

    let listing = app.request("GET", "/posts", None, Some(&token)).await;
    assert_eq!(listing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_foreign_post_forbidden() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (owner, _) = app.register("owner", "Owner", "password123").await;
    let (intruder, _) = app.register("intruder", "Intruder", "password123").await;
    let post_id = app.create_post(&owner, "protected", "body").await;

    let response = app
        .request(
            "DELETE",
            &format!("/posts/{post_id}"),
            None,
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.error_message(),
        "You are not authorized to delete this post"
    );

    // The post must survive the attempt.
    let listing = app.request("GET", "/posts", None, Some(&owner)).await;
    assert_eq!(listing.body["posts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_post() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let (token, _) = app.register("hunter", "Hunter", "password123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/posts/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Post not found");
}
