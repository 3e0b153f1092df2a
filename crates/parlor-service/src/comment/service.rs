//! Comment creation, listing, editing, and deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use parlor_core::error::AppError;
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_database::repositories::{CommentRepository, PostRepository};
use parlor_entity::comment::{Comment, CommentWithAuthor, CreateComment, UpdateComment};

use crate::context::RequestContext;

/// Handles comment use cases.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// Post repository, for existence checks.
    post_repo: Arc<PostRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comment_repo: Arc<CommentRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    /// Leaves a comment on a post.
    pub async fn create_comment(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        content: String,
    ) -> AppResult<Comment> {
        self.post_repo
            .find_by_id(post_id)
            .await
            .map_err(|e| e.with_message("Comment creation failed"))?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        let comment = self
            .comment_repo
            .create(&CreateComment {
                post_id,
                user_id: ctx.user_id,
                content,
            })
            .await
            .map_err(|e| e.with_message("Comment creation failed"))?;

        info!(comment_id = %comment.id, post_id = %post_id, user_id = %ctx.user_id, "Comment created");

        Ok(comment)
    }

    /// Lists one page of a post's comments with their authors, newest first.
    ///
    /// An empty page is a not-found condition, never an empty success.
    pub async fn list_comments(
        &self,
        post_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Vec<CommentWithAuthor>> {
        let comments = self
            .comment_repo
            .find_by_post(post_id, page)
            .await
            .map_err(|e| e.with_message("Server error"))?;

        if comments.is_empty() {
            return Err(AppError::not_found("No comments found"));
        }

        Ok(comments)
    }

    /// Replaces the body of one of the caller's own comments.
    ///
    /// Same ownership shape as post deletion: missing comment and foreign
    /// comment are distinguished, and the write itself is owner-scoped.
    pub async fn update_comment(
        &self,
        ctx: &RequestContext,
        comment_id: Uuid,
        content: String,
    ) -> AppResult<Comment> {
        let existing = self
            .comment_repo
            .find_by_id(comment_id)
            .await
            .map_err(|e| e.with_message("Failed to update comment"))?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        if existing.user_id != ctx.user_id {
            return Err(AppError::forbidden(
                "You are not authorized to edit this comment",
            ));
        }

        let updated = self
            .comment_repo
            .update_owned(
                &UpdateComment {
                    id: comment_id,
                    content,
                },
                ctx.user_id,
            )
            .await
            .map_err(|e| e.with_message("Failed to update comment"))?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        info!(comment_id = %comment_id, user_id = %ctx.user_id, "Comment updated");

        Ok(updated)
    }

    /// Permanently deletes one of the caller's own comments.
    pub async fn delete_comment(&self, ctx: &RequestContext, comment_id: Uuid) -> AppResult<()> {
        let existing = self
            .comment_repo
            .find_by_id(comment_id)
            .await
            .map_err(|e| e.with_message("Failed to delete comment"))?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        if existing.user_id != ctx.user_id {
            return Err(AppError::forbidden(
                "You are not authorized to delete this comment",
            ));
        }

        let deleted = self
            .comment_repo
            .delete_owned(comment_id, ctx.user_id)
            .await
            .map_err(|e| e.with_message("Failed to delete comment"))?;
        if !deleted {
            return Err(AppError::not_found("Comment not found"));
        }

        info!(comment_id = %comment_id, user_id = %ctx.user_id, "Comment deleted");

        Ok(())
    }
}
