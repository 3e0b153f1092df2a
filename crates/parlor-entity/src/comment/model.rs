//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserSummary;

/// A comment left on a post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The commented post.
    pub post_id: Uuid,
    /// The commenting user.
    pub user_id: Uuid,
    /// Comment body.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A comment joined with its author's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The commented post.
    pub post_id: Uuid,
    /// Comment body.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
    /// The author's public profile.
    #[sqlx(flatten)]
    pub author: UserSummary,
}

/// Data required to create a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The post being commented on.
    pub post_id: Uuid,
    /// The commenting user's ID.
    pub user_id: Uuid,
    /// Comment body.
    pub content: String,
}

/// Data for updating an existing comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateComment {
    /// The comment ID to update.
    pub id: Uuid,
    /// New body.
    pub content: String,
}
