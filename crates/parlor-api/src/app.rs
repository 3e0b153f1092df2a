//! Application builder that wires router, middleware, and state into an Axum app.

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use parlor_auth::jwt::decoder::JwtDecoder;
use parlor_auth::jwt::encoder::JwtEncoder;
use parlor_auth::password::hasher::PasswordHasher;
use parlor_core::config::AppConfig;
use parlor_core::error::AppError;
use parlor_database::repositories::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
};
use parlor_service::auth::AuthService;
use parlor_service::comment::CommentService;
use parlor_service::like::LikeService;
use parlor_service::post::PostService;
use parlor_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Auth primitives ──────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
    let like_repo = Arc::new(LikeRepository::new(db_pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let post_service = Arc::new(PostService::new(Arc::clone(&post_repo)));
    let like_service = Arc::new(LikeService::new(
        Arc::clone(&like_repo),
        Arc::clone(&post_repo),
    ));
    let comment_service = Arc::new(CommentService::new(
        Arc::clone(&comment_repo),
        Arc::clone(&post_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        post_repo,
        like_repo,
        comment_repo,
        auth_service,
        user_service,
        post_service,
        like_service,
        comment_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Parlor server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Parlor server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
