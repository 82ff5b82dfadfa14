//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment attached to exactly one post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The post this comment belongs to.
    pub post_id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Body text.
    pub body: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// A comment enriched with its author's summary for list reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The post this comment belongs to.
    pub post_id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Author handle.
    pub author_username: String,
    /// Author display name (optional).
    pub author_display_name: Option<String>,
    /// Body text.
    pub body: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The post being commented on.
    pub post_id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Body text.
    pub body: String,
}
