//! Account registration and credential authentication.

pub mod service;

pub use service::AuthService;
