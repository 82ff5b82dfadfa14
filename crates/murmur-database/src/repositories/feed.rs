//! Feed repository implementation.
//!
//! The feed is computed on read: posts authored by the users the viewer
//! follows, newest first. A viewer who follows nobody gets an empty
//! page, not a global timeline.

use sqlx::PgPool;
use uuid::Uuid;

use murmur_core::error::{AppError, ErrorKind};
use murmur_core::result::AppResult;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_entity::post::model::PostWithMeta;

/// Repository for the follow-scoped home feed.
#[derive(Debug, Clone)]
pub struct FeedRepository {
    pool: PgPool,
}

impl FeedRepository {
    /// Create a new feed repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Page of posts from the viewer's followed authors, newest first.
    pub async fn find_for_user(
        &self,
        viewer_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts p \
             JOIN follows f ON f.followee_id = p.author_id \
             WHERE f.follower_id = $1",
        )
        .bind(viewer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count feed", e))?;

        let posts = sqlx::query_as::<_, PostWithMeta>(
            "SELECT p.id, p.author_id, \
                    u.username AS author_username, u.display_name AS author_display_name, p.body, \
                    (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count, \
                    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count, \
                    EXISTS(SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1) AS is_liked, \
                    p.created_at \
             FROM posts p \
             JOIN users u ON u.id = p.author_id \
             JOIN follows f ON f.followee_id = p.author_id \
             WHERE f.follower_id = $1 \
             ORDER BY p.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(viewer_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load feed", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
