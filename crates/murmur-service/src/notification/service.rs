//! Recipient-facing notification operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use murmur_core::error::AppError;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_database::repositories::notification::NotificationRepository;
use murmur_entity::notification::Notification;

use crate::context::RequestContext;

/// Handles a recipient's view of their notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the current user's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notification_repo
            .find_by_recipient(ctx.user_id, page)
            .await
    }

    /// Counts the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notification_repo.count_unread(ctx.user_id).await
    }

    /// Marks one of the current user's notifications as read.
    ///
    /// Only the recipient may mark a notification; anyone else gets an
    /// authorization error and the flag stays untouched. Idempotent:
    /// marking an already-read notification succeeds and changes
    /// nothing.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> Result<Notification, AppError> {
        let notification = self
            .notification_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;

        if notification.recipient_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the recipient may mark a notification as read",
            ));
        }

        if notification.read {
            return Ok(notification);
        }

        let read_at = Utc::now();
        self.notification_repo.mark_read(id, read_at).await?;

        info!(user_id = %ctx.user_id, notification_id = %id, "Notification marked read");

        Ok(Notification {
            read: true,
            read_at: Some(read_at),
            ..notification
        })
    }

    /// Marks all of the current user's notifications as read. Returns
    /// how many were newly marked.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        let marked = self
            .notification_repo
            .mark_all_read(ctx.user_id, Utc::now())
            .await?;

        if marked > 0 {
            info!(user_id = %ctx.user_id, marked, "All notifications marked read");
        }

        Ok(marked)
    }
}
