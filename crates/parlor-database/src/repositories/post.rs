//! Post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use parlor_core::error::{AppError, ErrorKind};
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_entity::post::{CreatePost, Post, PostWithAuthor};

/// Columns selected for post-with-author projections. The joined user
/// columns are aliased to match `UserSummary`'s column mapping.
const POST_WITH_AUTHOR_COLUMNS: &str = "p.id, p.title, p.content, p.user_id, p.created_at, \
     u.id AS author_id, u.username AS author_username";

/// Repository for post persistence and query operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by id", e))
    }

    /// List one page of posts with their authors, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<Vec<PostWithAuthor>> {
        let query = format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS} \
             FROM posts p \
             INNER JOIN users u ON u.id = p.user_id \
             ORDER BY p.created_at DESC \
             LIMIT $1 OFFSET $2"
        );

        sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(page.take() as i64)
            .bind(page.skip() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// List one page of a single author's posts, newest first.
    pub async fn find_by_author(
        &self,
        author_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Vec<PostWithAuthor>> {
        let query = format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS} \
             FROM posts p \
             INNER JOIN users u ON u.id = p.user_id \
             WHERE p.user_id = $1 \
             ORDER BY p.created_at DESC \
             LIMIT $2 OFFSET $3"
        );

        sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(author_id)
            .bind(page.take() as i64)
            .bind(page.skip() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list posts by author", e)
            })
    }

    /// Create a new post.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Delete a post only if it belongs to the given owner.
    ///
    /// Returns whether a row was actually removed, so callers can tell a
    /// successful delete from a post that vanished between their ownership
    /// check and the delete.
    pub async fn delete_owned(&self, post_id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        Ok(result.rows_affected() > 0)
    }
}
