//! Like repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use parlor_core::error::{AppError, ErrorKind};
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_entity::like::{Like, LikeWithUser};

/// Repository for like persistence and query operations.
#[derive(Debug, Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    /// Create a new like repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Place a like on a post.
    ///
    /// The `(post_id, user_id)` unique constraint turns a repeated like
    /// into a conflict.
    pub async fn create(&self, post_id: Uuid, user_id: Uuid) -> AppResult<Like> {
        sqlx::query_as::<_, Like>(
            "INSERT INTO likes (post_id, user_id) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("likes_post_id_user_id_key") =>
            {
                AppError::conflict("Post already liked")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create like", e),
        })
    }

    /// Remove the caller's like from a post.
    ///
    /// Returns whether a like was actually removed.
    pub async fn delete(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete like", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// List one page of a post's likes with the liking users, newest first.
    pub async fn find_by_post(
        &self,
        post_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Vec<LikeWithUser>> {
        sqlx::query_as::<_, LikeWithUser>(
            "SELECT l.id, l.post_id, l.created_at, \
                    u.id AS author_id, u.username AS author_username \
             FROM likes l \
             INNER JOIN users u ON u.id = l.user_id \
             WHERE l.post_id = $1 \
             ORDER BY l.created_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(post_id)
        .bind(page.take() as i64)
        .bind(page.skip() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list likes", e))
    }
}
