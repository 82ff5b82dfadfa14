//! Follow edge management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use murmur_core::error::AppError;
use murmur_database::repositories::follow::FollowRepository;
use murmur_database::repositories::user::UserRepository;
use murmur_entity::notification::{NotificationVerb, TargetRef};

use crate::context::RequestContext;
use crate::notification::fanout::notification_for;

/// Handles follow edge creation and removal.
#[derive(Debug, Clone)]
pub struct GraphService {
    /// User repository for followee existence checks.
    user_repo: Arc<UserRepository>,
    /// Follow repository.
    follow_repo: Arc<FollowRepository>,
}

impl GraphService {
    /// Creates a new graph service.
    pub fn new(user_repo: Arc<UserRepository>, follow_repo: Arc<FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    /// Follows another user. Returns whether a new edge was created;
    /// re-following is a no-op.
    ///
    /// The follow notification targets the follower's own user record,
    /// so the recipient can navigate straight to who followed them.
    pub async fn follow(&self, ctx: &RequestContext, followee_id: Uuid) -> Result<bool, AppError> {
        if followee_id == ctx.user_id {
            return Err(AppError::self_reference("Users cannot follow themselves"));
        }

        if !self.user_repo.exists(followee_id).await? {
            return Err(AppError::not_found(format!("User {followee_id} not found")));
        }

        let notification = notification_for(
            ctx.user_id,
            followee_id,
            NotificationVerb::Follow,
            TargetRef::user(ctx.user_id),
        );

        let created = self
            .follow_repo
            .create(ctx.user_id, followee_id, notification.as_ref())
            .await?;

        if created {
            info!(follower_id = %ctx.user_id, followee_id = %followee_id, "Follow created");
        }

        Ok(created)
    }

    /// Unfollows a user. Returns whether an edge was removed; removing
    /// a non-existent edge is a no-op.
    pub async fn unfollow(&self, ctx: &RequestContext, followee_id: Uuid) -> Result<bool, AppError> {
        if followee_id == ctx.user_id {
            return Err(AppError::self_reference("Users cannot unfollow themselves"));
        }

        if !self.user_repo.exists(followee_id).await? {
            return Err(AppError::not_found(format!("User {followee_id} not found")));
        }

        let removed = self.follow_repo.delete(ctx.user_id, followee_id).await?;

        if removed {
            info!(follower_id = %ctx.user_id, followee_id = %followee_id, "Follow removed");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use murmur_core::error::ErrorKind;
    use sqlx::PgPool;

    // A lazy pool never opens a connection; these tests only exercise
    // the guards that return before any query runs.
    fn service() -> GraphService {
        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        GraphService::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(FollowRepository::new(pool)),
        )
    }

    #[tokio::test]
    async fn follow_rejects_self() {
        let svc = service();
        let ctx = RequestContext::new(Uuid::new_v4(), "ada".to_string());

        let err = svc.follow(&ctx, ctx.user_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::SelfReference);
    }

    #[tokio::test]
    async fn unfollow_rejects_self() {
        let svc = service();
        let ctx = RequestContext::new(Uuid::new_v4(), "ada".to_string());

        let err = svc.unfollow(&ctx, ctx.user_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::SelfReference);
    }
}
