//! Notification repository implementation.
//!
//! Notification *writes* triggered by interactions happen inside the
//! interaction's own transaction (see the like, follow, and comment
//! repositories), via [`insert_in_tx`]. This repository covers the
//! recipient-facing reads and the read-flag updates.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use murmur_core::error::{AppError, ErrorKind};
use murmur_core::result::AppResult;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_entity::notification::{NewNotification, Notification};

/// Insert a notification as part of an already-open transaction.
pub(crate) async fn insert_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    notification: &NewNotification,
) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO notifications (recipient_id, actor_id, verb, target_kind, target_id) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(notification.recipient_id)
    .bind(notification.actor_id)
    .bind(notification.verb)
    .bind(notification.target.kind)
    .bind(notification.target.id)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert notification", e))?;
    Ok(())
}

/// Repository for notification reads and read-flag updates.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications for a recipient, newest first.
    pub async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE recipient_id = $1")
                .bind(recipient_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
                })?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE recipient_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(recipient_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a notification by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// Count unread notifications for a recipient.
    pub async fn count_unread(&self, recipient_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND read = FALSE",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a notification as read.
    pub async fn mark_read(&self, id: Uuid, read_at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET read = TRUE, read_at = $2 WHERE id = $1")
            .bind(id)
            .bind(read_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(())
    }

    /// Mark all of a recipient's notifications as read. Returns how many
    /// were newly marked.
    pub async fn mark_all_read(
        &self,
        recipient_id: Uuid,
        read_at: DateTime<Utc>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE, read_at = $2 \
             WHERE recipient_id = $1 AND read = FALSE",
        )
        .bind(recipient_id)
        .bind(read_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }
}
