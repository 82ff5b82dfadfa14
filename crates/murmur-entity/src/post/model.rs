//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An owned content item authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Body text.
    pub body: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A post enriched with author and engagement metadata for list reads.
///
/// `like_count` and `comment_count` are derived attributes; `is_liked`
/// is relative to the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostWithMeta {
    /// Unique post identifier.
    pub id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Author handle.
    pub author_username: String,
    /// Author display name (optional).
    pub author_display_name: Option<String>,
    /// Body text.
    pub body: String,
    /// Number of likes on this post.
    pub like_count: i64,
    /// Number of comments on this post.
    pub comment_count: i64,
    /// Whether the requesting user has liked this post.
    pub is_liked: bool,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// The authoring user.
    pub author_id: Uuid,
    /// Body text.
    pub body: String,
}

/// Data for updating an existing post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    /// The post ID to update.
    pub id: Uuid,
    /// New body text.
    pub body: String,
}
