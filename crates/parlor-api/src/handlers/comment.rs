//! Comment handlers: create, list, update, delete.
//!
//! Create and list address a post (`/comments/{post_id}`); update and
//! delete address an individual comment (`/comments/{comment_id}`).

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{self, CreateCommentRequest, UpdateCommentRequest};
use crate::dto::response::{CommentResponse, CommentsResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /comments/{post_id}
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    request::validate(&req)?;

    let comment = state
        .comment_service
        .create_comment(auth.context(), post_id, req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// GET /comments/{post_id}
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let page = params.into_page_request();
    let comments = state.comment_service.list_comments(post_id, &page).await?;

    Ok(Json(CommentsResponse { comments }))
}

/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Uuid>,
    Json(req): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    request::validate(&req)?;

    let comment = state
        .comment_service
        .update_comment(auth.context(), comment_id, req.content)
        .await?;

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .comment_service
        .delete_comment(auth.context(), comment_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Comment deleted successfully".to_string(),
    }))
}
