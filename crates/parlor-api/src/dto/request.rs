//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use parlor_core::error::AppError;

/// Runs derive-based validation, turning the first field failure into a
/// client-facing validation error.
pub fn validate(request: &impl Validate) -> Result<(), AppError> {
    request.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|error| error.message.as_ref())
            .map(ToString::to_string)
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::validation(message)
    })
}

/// Registration request body.
///
/// All request fields default to empty strings so a missing field and an
/// empty one report the same validation error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 3, max = 30, message = "Username must be between 3 and 30 characters"))]
    pub username: String,
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create post request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and Content are required"))]
    pub title: String,
    /// Post body.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and Content are required"))]
    pub content: String,
}

/// Create comment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Update comment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    /// Replacement comment text.
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}
