//! User profile and listing operations.

use std::sync::Arc;

use parlor_core::error::AppError;
use parlor_core::result::AppResult;
use parlor_core::types::PageRequest;
use parlor_database::repositories::UserRepository;
use parlor_entity::user::User;

use crate::context::RequestContext;

/// Handles user queries.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's full record.
    pub async fn get_me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await
            .map_err(|e| e.with_message("Server error"))?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists one page of users, ordered by display name ascending.
    ///
    /// An empty page is a not-found condition, never an empty success.
    pub async fn list_users(&self, page: &PageRequest) -> AppResult<Vec<User>> {
        let users = self
            .user_repo
            .find_all(page)
            .await
            .map_err(|e| e.with_message("Server error"))?;

        if users.is_empty() {
            return Err(AppError::not_found("No users found"));
        }

        Ok(users)
    }
}
