//! `AuthUser` extractor that validates the `token` header and injects the caller's identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use parlor_core::error::AppError;
use parlor_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The token travels in a bare `token` header, no Bearer prefix.
        let token = parts
            .headers
            .get("token")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Unauthorized")))?;

        // Decode and validate the JWT. The precise rejection reason stays in the
        // server logs; clients always see the same 401.
        let claims = state.jwt_decoder.decode_token(token).map_err(|e| {
            tracing::debug!(reason = %e.message, "Token rejected");
            ApiError::from(AppError::unauthorized("Unauthorized"))
        })?;

        let user_id = claims.user_id();
        let ctx = RequestContext::new(user_id, claims.username);

        Ok(AuthUser(ctx))
    }
}
