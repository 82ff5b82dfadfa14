//! Comment repository implementation.
//!
//! The comment id is generated by the database, so when a comment
//! notification is due the repository builds it around the returned row
//! inside the insert transaction.

use sqlx::PgPool;
use uuid::Uuid;

use murmur_core::error::{AppError, ErrorKind};
use murmur_core::result::AppResult;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_entity::notification::{NewNotification, NotificationVerb, TargetKind, TargetRef};
use murmur_entity::post::comment::{Comment, CommentWithAuthor, CreateComment};

use super::notification::insert_in_tx;

/// Repository for comment writes and per-post reads.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment. If `notify_recipient` is set, a comment
    /// notification targeting the new comment is written to that user
    /// in the same transaction.
    pub async fn create(
        &self,
        data: &CreateComment,
        notify_recipient: Option<Uuid>,
    ) -> AppResult<Comment> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, author_id, body) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.post_id)
        .bind(data.author_id)
        .bind(&data.body)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))?;

        if let Some(recipient_id) = notify_recipient {
            let notification = NewNotification {
                recipient_id,
                actor_id: data.author_id,
                verb: NotificationVerb::Comment,
                target: TargetRef::comment(comment.id),
            };
            insert_in_tx(&mut tx, &notification).await?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit comment", e)
        })?;

        Ok(comment)
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// List a post's comments, oldest first.
    pub async fn find_by_post(
        &self,
        post_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CommentWithAuthor>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count comments", e)
            })?;

        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.author_id, \
                    u.username AS author_username, u.display_name AS author_display_name, \
                    c.body, c.created_at \
             FROM comments c JOIN users u ON u.id = c.author_id \
             WHERE c.post_id = $1 \
             ORDER BY c.created_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(post_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        Ok(PageResponse::new(
            comments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Delete a comment, removing notifications that target it in the
    /// same transaction. Returns whether a comment was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM notifications WHERE target_kind = $1 AND target_id = $2")
            .bind(TargetKind::Comment)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to delete comment notifications",
                    e,
                )
            })?;

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit comment delete", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
