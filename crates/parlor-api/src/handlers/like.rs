//! Like handlers: like, unlike, list.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::response::{LikeResponse, LikesResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /likes/{post_id}
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<(StatusCode, Json<LikeResponse>), ApiError> {
    let like = state.like_service.like_post(auth.context(), post_id).await?;

    Ok((StatusCode::CREATED, Json(LikeResponse { like })))
}

/// DELETE /likes/{post_id}
pub async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.like_service.unlike_post(auth.context(), post_id).await?;

    Ok(Json(MessageResponse {
        message: "Like removed successfully".to_string(),
    }))
}

/// GET /likes/{post_id}
pub async fn list_likes(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<LikesResponse>, ApiError> {
    let page = params.into_page_request();
    let likes = state.like_service.list_likes(post_id, &page).await?;

    Ok(Json(LikesResponse { likes }))
}
