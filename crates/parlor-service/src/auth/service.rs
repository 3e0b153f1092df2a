//! Account registration and login.

use std::sync::Arc;

use tracing::info;

use parlor_auth::jwt::JwtEncoder;
use parlor_auth::password::PasswordHasher;
use parlor_core::error::{AppError, ErrorKind};
use parlor_core::result::AppResult;
use parlor_database::repositories::UserRepository;
use parlor_entity::user::{CreateUser, User};

/// Handles account registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a new account and issues its first token.
    ///
    /// A taken username surfaces as a conflict; every other failure is
    /// reported to the client as a generic server error.
    pub async fn register(
        &self,
        username: String,
        name: String,
        password: &str,
    ) -> AppResult<(String, User)> {
        let password_hash = self
            .hasher
            .hash_password(password)
            .map_err(|e| e.with_message("Server error"))?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username,
                name,
                password_hash,
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => e,
                _ => e.with_message("Server error"),
            })?;

        let token = self
            .encoder
            .generate_token(user.id, &user.username)
            .map_err(|e| e.with_message("Server error"))?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok((token, user))
    }

    /// Verifies credentials and issues a token.
    ///
    /// An unknown username and a wrong password are indistinguishable to
    /// the caller.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(|e| e.with_message("Server error"))?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        let valid = self
            .hasher
            .verify_password(password, &user.password_hash)
            .map_err(|e| e.with_message("Server error"))?;
        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let token = self
            .encoder
            .generate_token(user.id, &user.username)
            .map_err(|e| e.with_message("Server error"))?;

        info!(user_id = %user.id, "User logged in");

        Ok((token, user))
    }
}
