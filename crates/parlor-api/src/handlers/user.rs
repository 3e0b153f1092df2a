//! User handlers: profile and listing.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::response::{UserResponse, UsersResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_me(auth.context()).await?;

    Ok(Json(UserResponse { user }))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<UsersResponse>, ApiError> {
    let page = params.into_page_request();
    let users = state.user_service.list_users(&page).await?;

    Ok(Json(UsersResponse { users }))
}
