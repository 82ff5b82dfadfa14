//! Home feed assembly.

pub mod service;

pub use service::FeedService;
