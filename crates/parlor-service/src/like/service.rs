//! Liking and unliking posts.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use parlor_core::error::{AppError, ErrorKind};
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_database::repositories::{LikeRepository, PostRepository};
use parlor_entity::like::{Like, LikeWithUser};

use crate::context::RequestContext;

/// Handles like use cases.
#[derive(Debug, Clone)]
pub struct LikeService {
    /// Like repository.
    like_repo: Arc<LikeRepository>,
    /// Post repository, for existence checks.
    post_repo: Arc<PostRepository>,
}

impl LikeService {
    /// Creates a new like service.
    pub fn new(like_repo: Arc<LikeRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            like_repo,
            post_repo,
        }
    }

    /// Places the caller's like on a post.
    ///
    /// Liking the same post twice is a conflict.
    pub async fn like_post(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<Like> {
        self.post_repo
            .find_by_id(post_id)
            .await
            .map_err(|e| e.with_message("Server error"))?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        let like = self
            .like_repo
            .create(post_id, ctx.user_id)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => e,
                _ => e.with_message("Server error"),
            })?;

        info!(post_id = %post_id, user_id = %ctx.user_id, "Post liked");

        Ok(like)
    }

    /// Removes the caller's like from a post.
    pub async fn unlike_post(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<()> {
        let removed = self
            .like_repo
            .delete(post_id, ctx.user_id)
            .await
            .map_err(|e| e.with_message("Failed to remove like"))?;
        if !removed {
            return Err(AppError::not_found("Like not found"));
        }

        info!(post_id = %post_id, user_id = %ctx.user_id, "Like removed");

        Ok(())
    }

    /// Lists one page of a post's likes with the liking users, newest first.
    ///
    /// An empty page is a not-found condition, never an empty success.
    pub async fn list_likes(
        &self,
        post_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Vec<LikeWithUser>> {
        let likes = self
            .like_repo
            .find_by_post(post_id, page)
            .await
            .map_err(|e| e.with_message("Server error"))?;

        if likes.is_empty() {
            return Err(AppError::not_found("No likes found"));
        }

        Ok(likes)
    }
}
