//! Response DTOs.
//!
//! Every success body wraps its payload in a single named field, e.g.
//! `{"post": {...}}` or `{"posts": [...]}`. Envelopes only serialize;
//! entities such as [`User`] withhold fields on the way out and so
//! cannot round-trip through their public JSON form.

use serde::Serialize;

use parlor_entity::comment::{Comment, CommentWithAuthor};
use parlor_entity::like::{Like, LikeWithUser};
use parlor_entity::post::{Post, PostWithAuthor};
use parlor_entity::user::User;

/// Login and registration response.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Signed JWT for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Single user response.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// The user.
    pub user: User,
}

/// User listing response.
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    /// Users in this page.
    pub users: Vec<User>,
}

/// Single post response.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    /// The post.
    pub post: Post,
}

/// Post listing response.
#[derive(Debug, Clone, Serialize)]
pub struct PostsResponse {
    /// Posts in this page, each with its author.
    pub posts: Vec<PostWithAuthor>,
}

/// Single like response.
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    /// The like.
    pub like: Like,
}

/// Like listing response.
#[derive(Debug, Clone, Serialize)]
pub struct LikesResponse {
    /// Likes in this page, each with the liking user.
    pub likes: Vec<LikeWithUser>,
}

/// Single comment response.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    /// The comment.
    pub comment: Comment,
}

/// Comment listing response.
#[derive(Debug, Clone, Serialize)]
pub struct CommentsResponse {
    /// Comments in this page, each with its author.
    pub comments: Vec<CommentWithAuthor>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
