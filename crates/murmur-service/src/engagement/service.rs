//! Like management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use murmur_core::error::AppError;
use murmur_database::repositories::like::LikeRepository;
use murmur_database::repositories::post::PostRepository;
use murmur_entity::notification::{NotificationVerb, TargetRef};

use crate::context::RequestContext;
use crate::notification::fanout::notification_for;

/// Handles liking and unliking posts.
#[derive(Debug, Clone)]
pub struct EngagementService {
    /// Post repository for existence and ownership lookups.
    post_repo: Arc<PostRepository>,
    /// Like repository.
    like_repo: Arc<LikeRepository>,
}

impl EngagementService {
    /// Creates a new engagement service.
    pub fn new(post_repo: Arc<PostRepository>, like_repo: Arc<LikeRepository>) -> Self {
        Self {
            post_repo,
            like_repo,
        }
    }

    /// Likes a post. Returns whether a new like was recorded;
    /// re-liking is a no-op.
    pub async fn like(&self, ctx: &RequestContext, post_id: Uuid) -> Result<bool, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        let notification = notification_for(
            ctx.user_id,
            post.author_id,
            NotificationVerb::Like,
            TargetRef::post(post.id),
        );

        let created = self
            .like_repo
            .create(ctx.user_id, post_id, notification.as_ref())
            .await?;

        if created {
            info!(user_id = %ctx.user_id, post_id = %post_id, "Post liked");
        }

        Ok(created)
    }

    /// Unlikes a post. Returns whether a like was removed; unliking a
    /// post that was never liked is a no-op.
    pub async fn unlike(&self, ctx: &RequestContext, post_id: Uuid) -> Result<bool, AppError> {
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::not_found(format!("Post {post_id} not found")));
        }

        let removed = self.like_repo.delete(ctx.user_id, post_id).await?;

        if removed {
            info!(user_id = %ctx.user_id, post_id = %post_id, "Post unliked");
        }

        Ok(removed)
    }
}
