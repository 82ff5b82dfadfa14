//! Social graph operations — follow and unfollow.

pub mod service;

pub use service::GraphService;
