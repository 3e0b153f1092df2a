//! Post handlers: create, list, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{self, CreatePostRequest};
use crate::dto::response::{MessageResponse, PostResponse, PostsResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    request::validate(&req)?;

    let post = state
        .post_service
        .create_post(Some(auth.user_id), req.title, req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse { post })))
}

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PostsResponse>, ApiError> {
    let page = params.into_page_request();
    let posts = state.post_service.list_posts(&page).await?;

    Ok(Json(PostsResponse { posts }))
}

/// GET /posts/me
pub async fn list_my_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PostsResponse>, ApiError> {
    let page = params.into_page_request();
    let posts = state
        .post_service
        .list_posts_by_author(auth.user_id, &page)
        .await?;

    Ok(Json(PostsResponse { posts }))
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.post_service.delete_post(auth.context(), post_id).await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
