//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{self, LoginRequest, RegisterRequest};
use crate::dto::response::AuthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    request::validate(&req)?;

    let (token, user) = state
        .auth_service
        .register(req.username, req.name, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    request::validate(&req)?;

    let (token, user) = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(AuthResponse { token, user }))
}
