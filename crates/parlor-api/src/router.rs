//! Route definitions for the Parlor HTTP API.
//!
//! All routes are organized by domain and mounted at the root.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(post_routes())
        .merge(user_routes())
        .merge(like_routes())
        .merge(comment_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Post CRD and listings
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::post::create_post))
        .route("/posts", get(handlers::post::list_posts))
        .route("/posts/me", get(handlers::post::list_my_posts))
        .route("/posts/{post_id}", delete(handlers::post::delete_post))
}

/// User profile and listing
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_me))
        .route("/users", get(handlers::user::list_users))
}

/// Like endpoints, all keyed by post
fn like_routes() -> Router<AppState> {
    Router::new()
        .route("/likes/{post_id}", post(handlers::like::like_post))
        .route("/likes/{post_id}", get(handlers::like::list_likes))
        .route("/likes/{post_id}", delete(handlers::like::unlike_post))
}

/// Comment endpoints.
///
/// Create and list key on a post id while update and delete key on a
/// comment id; a single path pattern serves both since `Path<Uuid>`
/// extraction is positional.
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/{id}", post(handlers::comment::create_comment))
        .route("/comments/{id}", get(handlers::comment::list_comments))
        .route("/comments/{id}", patch(handlers::comment::update_comment))
        .route("/comments/{id}", delete(handlers::comment::delete_comment))
}
