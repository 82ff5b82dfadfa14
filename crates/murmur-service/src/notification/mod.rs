//! Notification fan-out rules and recipient-facing operations.

pub mod fanout;
pub mod service;

pub use fanout::notification_for;
pub use service::NotificationService;
