//! Post engagement operations — like and unlike.

pub mod service;

pub use service::EngagementService;
