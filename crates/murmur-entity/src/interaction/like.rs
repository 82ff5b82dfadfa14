//! Like interaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A like by a user on a post. At most one exists per (user, post) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Like {
    /// Unique like identifier.
    pub id: Uuid,
    /// The acting user.
    pub user_id: Uuid,
    /// The liked post.
    pub post_id: Uuid,
    /// When the like was recorded.
    pub created_at: DateTime<Utc>,
}
