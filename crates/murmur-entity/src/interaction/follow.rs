//! Follow edge record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A directed follow edge: the follower sees the followee's posts in
/// their feed. Unique per (follower, followee) pair; never reflexive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Follow {
    /// The following user.
    pub follower_id: Uuid,
    /// The followed user.
    pub followee_id: Uuid,
    /// When the edge was created.
    pub created_at: DateTime<Utc>,
}

/// Aggregate follow counts for a profile view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowStats {
    /// How many users follow this user.
    pub followers: i64,
    /// How many users this user follows.
    pub following: i64,
}
