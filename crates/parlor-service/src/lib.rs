//! # parlor-service
//!
//! Business logic service layer for Parlor. Each service orchestrates
//! repositories and authentication components to implement application-level
//! use cases, and owns the client-facing message of every outcome.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod comment;
pub mod context;
pub mod like;
pub mod post;
pub mod user;

pub use auth::AuthService;
pub use comment::CommentService;
pub use context::RequestContext;
pub use like::LikeService;
pub use post::PostService;
pub use user::UserService;
