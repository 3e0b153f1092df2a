//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use parlor_auth::jwt::decoder::JwtDecoder;
use parlor_auth::jwt::encoder::JwtEncoder;
use parlor_auth::password::hasher::PasswordHasher;
use parlor_core::config::AppConfig;

use parlor_database::repositories::comment::CommentRepository;
use parlor_database::repositories::like::LikeRepository;
use parlor_database::repositories::post::PostRepository;
use parlor_database::repositories::user::UserRepository;

use parlor_service::auth::service::AuthService;
use parlor_service::comment::service::CommentService;
use parlor_service::like::service::LikeService;
use parlor_service::post::service::PostService;
use parlor_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Post repository
    pub post_repo: Arc<PostRepository>,
    /// Like repository
    pub like_repo: Arc<LikeRepository>,
    /// Comment repository
    pub comment_repo: Arc<CommentRepository>,

    /// Registration and login service
    pub auth_service: Arc<AuthService>,
    /// User query service
    pub user_service: Arc<UserService>,
    /// Post service
    pub post_service: Arc<PostService>,
    /// Like service
    pub like_service: Arc<LikeService>,
    /// Comment service
    pub comment_service: Arc<CommentService>,
}
