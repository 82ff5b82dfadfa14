//! # murmur-service
//!
//! Business logic service layer for Murmur. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod engagement;
pub mod feed;
pub mod graph;
pub mod notification;
pub mod post;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use engagement::EngagementService;
pub use feed::FeedService;
pub use graph::GraphService;
pub use notification::NotificationService;
pub use post::PostService;
pub use user::UserService;
