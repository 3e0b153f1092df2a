//! Like entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserSummary;

/// A like placed on a post by a user.
///
/// Each (post, user) pair can hold at most one like.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Like {
    /// Unique like identifier.
    pub id: Uuid,
    /// The liked post.
    pub post_id: Uuid,
    /// The user who placed the like.
    pub user_id: Uuid,
    /// When the like was placed.
    pub created_at: DateTime<Utc>,
}

/// A like joined with the liking user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LikeWithUser {
    /// Unique like identifier.
    pub id: Uuid,
    /// The liked post.
    pub post_id: Uuid,
    /// When the like was placed.
    pub created_at: DateTime<Utc>,
    /// The liking user's public profile.
    #[sqlx(flatten)]
    pub user: UserSummary,
}
