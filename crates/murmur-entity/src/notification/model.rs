//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::target::{TargetKind, TargetRef};
use super::verb::NotificationVerb;

/// A notification derived from an interaction, delivered to one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub recipient_id: Uuid,
    /// The user whose interaction produced this notification.
    pub actor_id: Uuid,
    /// The interaction verb.
    pub verb: NotificationVerb,
    /// Kind of the target entity.
    pub target_kind: TargetKind,
    /// Identifier of the target entity.
    pub target_id: Uuid,
    /// Whether the recipient has read this notification.
    pub read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// The polymorphic target reference.
    pub fn target(&self) -> TargetRef {
        TargetRef {
            kind: self.target_kind,
            id: self.target_id,
        }
    }
}

/// A notification about to be written by the fan-out step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub recipient_id: Uuid,
    /// The acting user.
    pub actor_id: Uuid,
    /// The interaction verb.
    pub verb: NotificationVerb,
    /// The polymorphic target reference.
    pub target: TargetRef,
}
