//! Registration and login services.

pub mod service;

pub use service::AuthService;
