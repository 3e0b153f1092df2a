//! Comment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use parlor_core::error::{AppError, ErrorKind};
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_entity::comment::{Comment, CommentWithAuthor, CreateComment, UpdateComment};

/// Repository for comment persistence and query operations.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find comment by id", e)
            })
    }

    /// List one page of a post's comments with their authors, newest first.
    pub async fn find_by_post(
        &self,
        post_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Vec<CommentWithAuthor>> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.content, c.created_at, c.updated_at, \
                    u.id AS author_id, u.username AS author_username \
             FROM comments c \
             INNER JOIN users u ON u.id = c.user_id \
             WHERE c.post_id = $1 \
             ORDER BY c.created_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(post_id)
        .bind(page.take() as i64)
        .bind(page.skip() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Create a new comment.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, user_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.post_id)
        .bind(data.user_id)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    /// Update a comment's body only if it belongs to the given owner.
    ///
    /// Returns `None` when no row matched, so callers can tell an update
    /// from a comment that vanished between their ownership check and the
    /// write.
    pub async fn update_owned(
        &self,
        data: &UpdateComment,
        owner_id: Uuid,
    ) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET content = $2, updated_at = NOW() \
             WHERE id = $1 AND user_id = $3 \
             RETURNING *",
        )
        .bind(data.id)
        .bind(&data.content)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update comment", e))
    }

    /// Delete a comment only if it belongs to the given owner.
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete_owned(&self, comment_id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND user_id = $2")
            .bind(comment_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
