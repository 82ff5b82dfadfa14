//! Follow-scoped home feed.

use std::sync::Arc;

use murmur_core::error::AppError;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_database::repositories::feed::FeedRepository;
use murmur_entity::post::model::PostWithMeta;

use crate::context::RequestContext;

/// Assembles the home feed for the current user.
#[derive(Debug, Clone)]
pub struct FeedService {
    /// Feed repository.
    feed_repo: Arc<FeedRepository>,
}

impl FeedService {
    /// Creates a new feed service.
    pub fn new(feed_repo: Arc<FeedRepository>) -> Self {
        Self { feed_repo }
    }

    /// Pages through posts from the current user's followees, newest
    /// first. Following nobody yields an empty page.
    pub async fn get_feed(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        self.feed_repo.find_for_user(ctx.user_id, page).await
    }
}
