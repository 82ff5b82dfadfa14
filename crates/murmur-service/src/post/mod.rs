//! Post and comment operations.

pub mod service;

pub use service::PostService;
