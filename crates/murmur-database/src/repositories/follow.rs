//! Follow repository implementation.
//!
//! Follow edges are unique per (follower, followee) pair and irreflexive
//! (also enforced by a CHECK constraint). Edge creation and its follow
//! notification are one transaction.

use sqlx::PgPool;
use uuid::Uuid;

use murmur_core::error::{AppError, ErrorKind};
use murmur_core::result::AppResult;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_entity::interaction::FollowStats;
use murmur_entity::notification::NewNotification;
use murmur_entity::user::UserSummary;

use super::notification::insert_in_tx;

/// Repository for the follow side of the interaction ledger.
#[derive(Debug, Clone)]
pub struct FollowRepository {
    pool: PgPool,
}

impl FollowRepository {
    /// Create a new follow repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotently create a follow edge. If the edge is new and a
    /// notification was requested, it is written in the same
    /// transaction. Returns whether a new edge was created.
    pub async fn create(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
        notification: Option<&NewNotification>,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result = sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2) \
             ON CONFLICT (follower_id, followee_id) DO NOTHING",
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert follow", e))?;

        let created = result.rows_affected() > 0;

        if created {
            if let Some(notification) = notification {
                insert_in_tx(&mut tx, notification).await?;
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit follow", e)
        })?;

        Ok(created)
    }

    /// Idempotently remove a follow edge. Returns whether an edge was
    /// removed.
    pub async fn delete(&self, follower_id: Uuid, followee_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
                .bind(follower_id)
                .bind(followee_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete follow", e)
                })?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a follow edge exists.
    pub async fn is_following(&self, follower_id: Uuid, followee_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(follower_id)
        .bind(followee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check follow", e))
    }

    /// List the users who follow the given user.
    pub async fn find_followers(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserSummary>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE followee_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count followers", e)
            })?;

        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.username, u.display_name \
             FROM follows f JOIN users u ON u.id = f.follower_id \
             WHERE f.followee_id = $1 \
             ORDER BY f.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list followers", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List the users the given user follows.
    pub async fn find_following(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserSummary>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE follower_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count following", e)
            })?;

        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.username, u.display_name \
             FROM follows f JOIN users u ON u.id = f.followee_id \
             WHERE f.follower_id = $1 \
             ORDER BY f.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list following", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Follower/following counts for a profile view.
    pub async fn stats(&self, user_id: Uuid) -> AppResult<FollowStats> {
        let row: (i64, i64) = sqlx::query_as(
            "SELECT \
                (SELECT COUNT(*) FROM follows WHERE followee_id = $1), \
                (SELECT COUNT(*) FROM follows WHERE follower_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load follow stats", e)
        })?;

        Ok(FollowStats {
            followers: row.0,
            following: row.1,
        })
    }
}
