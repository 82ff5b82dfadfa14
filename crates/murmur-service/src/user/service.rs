//! User self-service and public profile operations.

use std::sync::Arc;

use tracing::info;

use murmur_core::error::AppError;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_database::repositories::follow::FollowRepository;
use murmur_database::repositories::user::UserRepository;
use murmur_entity::interaction::FollowStats;
use murmur_entity::user::{User, UserSummary};
use murmur_entity::user::model::UpdateProfile;

use crate::context::RequestContext;

/// Handles profile viewing and editing.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Follow repository for profile stats.
    follow_repo: Arc<FollowRepository>,
}

/// Data for updating a user's own profile.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileRequest {
    /// New email (optional).
    pub email: Option<String>,
    /// New display name (optional).
    pub display_name: Option<String>,
    /// New bio (optional).
    pub bio: Option<String>,
}

/// A user as seen on their profile page, with follow counts relative
/// to the viewer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    /// The profile owner.
    pub user: User,
    /// Follower and following counts.
    pub stats: FollowStats,
    /// Whether the viewer follows this user.
    pub is_following: bool,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, follow_repo: Arc<FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        if let Some(email) = &req.email {
            if !email.contains('@') || !email.contains('.') {
                return Err(AppError::validation("Invalid email format"));
            }
        }
        if let Some(display_name) = &req.display_name {
            if display_name.trim().is_empty() {
                return Err(AppError::validation("Display name cannot be empty"));
            }
        }

        let user = self
            .user_repo
            .update_profile(&UpdateProfile {
                id: ctx.user_id,
                email: req.email,
                display_name: req.display_name,
                bio: req.bio,
            })
            .await?;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(user)
    }

    /// Gets another user's profile page by username, with follow stats
    /// relative to the viewer.
    pub async fn get_by_username(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> Result<UserProfile, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        self.build_profile(ctx, user).await
    }

    /// Gets a user's profile page by id, with follow stats relative to
    /// the viewer.
    pub async fn get_by_id(
        &self,
        ctx: &RequestContext,
        user_id: uuid::Uuid,
    ) -> Result<UserProfile, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        self.build_profile(ctx, user).await
    }

    async fn build_profile(
        &self,
        ctx: &RequestContext,
        user: User,
    ) -> Result<UserProfile, AppError> {
        let stats = self.follow_repo.stats(user.id).await?;
        let is_following = if user.id == ctx.user_id {
            false
        } else {
            self.follow_repo.is_following(ctx.user_id, user.id).await?
        };

        Ok(UserProfile {
            user,
            stats,
            is_following,
        })
    }

    /// Lists the followers of a user.
    pub async fn followers(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<UserSummary>, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        self.follow_repo.find_followers(user.id, page).await
    }

    /// Lists the users a user follows.
    pub async fn following(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<UserSummary>, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        self.follow_repo.find_following(user.id, page).await
    }
}
