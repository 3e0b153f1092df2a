//! Post creation, listing, and deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use parlor_core::error::AppError;
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_database::repositories::PostRepository;
use parlor_entity::post::{CreatePost, Post, PostWithAuthor};

use crate::context::RequestContext;

/// Handles post use cases.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Creates a post on behalf of the given author.
    ///
    /// A missing author id resolves to "User not found" before the store
    /// is ever touched. Store-level rejections, including a foreign-key
    /// rejection of an author deleted mid-request, fold into the generic
    /// creation failure.
    pub async fn create_post(
        &self,
        author_id: Option<Uuid>,
        title: String,
        content: String,
    ) -> AppResult<Post> {
        let user_id = author_id.ok_or_else(|| AppError::not_found("User not found"))?;

        let post = self
            .post_repo
            .create(&CreatePost {
                title,
                content,
                user_id,
            })
            .await
            .map_err(|e| e.with_message("Post creation failed"))?;

        info!(post_id = %post.id, user_id = %post.user_id, "Post created");

        Ok(post)
    }

    /// Lists one page of posts with their authors, newest first.
    ///
    /// An empty page is a not-found condition, never an empty success.
    pub async fn list_posts(&self, page: &PageRequest) -> AppResult<Vec<PostWithAuthor>> {
        let posts = self
            .post_repo
            .find_all(page)
            .await
            .map_err(|e| e.with_message("Server error"))?;

        if posts.is_empty() {
            return Err(AppError::not_found("No posts found"));
        }

        Ok(posts)
    }

    /// Lists one page of a single author's posts, newest first.
    pub async fn list_posts_by_author(
        &self,
        author_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Vec<PostWithAuthor>> {
        let posts = self
            .post_repo
            .find_by_author(author_id, page)
            .await
            .map_err(|e| e.with_message("Server error"))?;

        if posts.is_empty() {
            return Err(AppError::not_found("No posts found"));
        }

        Ok(posts)
    }

    /// Permanently deletes one of the caller's own posts.
    ///
    /// The ownership check distinguishes a missing post (not found) from
    /// somebody else's post (forbidden). The delete itself is scoped to
    /// the owner and re-checked by affected-row count, so a post removed
    /// concurrently resolves to not found rather than a silent success.
    pub async fn delete_post(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<()> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await
            .map_err(|e| e.with_message("Failed to delete post"))?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        if post.user_id != ctx.user_id {
            return Err(AppError::forbidden(
                "You are not authorized to delete this post",
            ));
        }

        let deleted = self
            .post_repo
            .delete_owned(post_id, ctx.user_id)
            .await
            .map_err(|e| e.with_message("Failed to delete post"))?;
        if !deleted {
            return Err(AppError::not_found("Post not found"));
        }

        info!(post_id = %post_id, user_id = %ctx.user_id, "Post deleted");

        Ok(())
    }
}
