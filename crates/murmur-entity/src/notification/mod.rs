//! Notification domain entities.

pub mod model;
pub mod target;
pub mod verb;

pub use model::{NewNotification, Notification};
pub use target::{TargetKind, TargetRef};
pub use verb::NotificationVerb;
