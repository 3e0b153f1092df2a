//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserSummary;

/// A post written by a user.
///
/// Posts are immutable once created; the only mutation is owner-scoped
/// deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The user who wrote the post.
    pub user_id: Uuid,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// A post joined with its author's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostWithAuthor {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The user who wrote the post.
    pub user_id: Uuid,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// The author's public profile.
    #[sqlx(flatten)]
    pub author: UserSummary,
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The authoring user's ID.
    pub user_id: Uuid,
}
