//! # parlor-auth
//!
//! Token-based authentication for the Parlor backend.
//!
//! ## Modules
//!
//! - `jwt`: JWT token creation and validation
//! - `password`: Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
