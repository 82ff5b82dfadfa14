//! Like repository implementation.
//!
//! The like and its notification are written (and retracted) as one
//! transaction, so a like never exists without its fan-out and vice
//! versa, even under concurrent double-submission.

use sqlx::PgPool;
use uuid::Uuid;

use murmur_core::error::{AppError, ErrorKind};
use murmur_core::result::AppResult;
use murmur_entity::notification::{NewNotification, NotificationVerb, TargetKind};

use super::notification::insert_in_tx;

/// Repository for the like side of the interaction ledger.
#[derive(Debug, Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    /// Create a new like repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotently record a like. If a row was created and a
    /// notification was requested, it is written in the same
    /// transaction. Returns whether a new like was created.
    pub async fn create(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        notification: Option<&NewNotification>,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result = sqlx::query(
            "INSERT INTO likes (user_id, post_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, post_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert like", e))?;

        let created = result.rows_affected() > 0;

        if created {
            if let Some(notification) = notification {
                insert_in_tx(&mut tx, notification).await?;
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit like", e)
        })?;

        Ok(created)
    }

    /// Idempotently remove a like, retracting its notification in the
    /// same transaction. Returns whether a like was removed.
    pub async fn delete(&self, user_id: Uuid, post_id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete like", e))?;

        let removed = result.rows_affected() > 0;

        if removed {
            sqlx::query(
                "DELETE FROM notifications \
                 WHERE actor_id = $1 AND verb = $2 AND target_kind = $3 AND target_id = $4",
            )
            .bind(user_id)
            .bind(NotificationVerb::Like)
            .bind(TargetKind::Post)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to retract notification", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit unlike", e)
        })?;

        Ok(removed)
    }

    /// Count likes on a post.
    pub async fn count_for_post(&self, post_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count likes", e))
    }

    /// Check whether a user has liked a post.
    pub async fn exists(&self, user_id: Uuid, post_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND post_id = $2)",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check like", e))
    }
}
