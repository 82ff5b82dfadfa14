//! Post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use murmur_core::error::{AppError, ErrorKind};
use murmur_core::result::AppResult;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_entity::notification::TargetKind;
use murmur_entity::post::model::{CreatePost, Post, PostWithMeta, UpdatePost};

/// Columns and joins shared by every enriched post read.
const POST_WITH_META: &str = "SELECT p.id, p.author_id, \
        u.username AS author_username, u.display_name AS author_display_name, p.body, \
        (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count, \
        (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count, \
        EXISTS(SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1) AS is_liked, \
        p.created_at \
     FROM posts p JOIN users u ON u.id = p.author_id";

/// Repository for post CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (author_id, body) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.author_id)
        .bind(&data.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// Find a post with author and engagement metadata, relative to the
    /// viewing user.
    pub async fn find_with_meta(&self, viewer_id: Uuid, id: Uuid) -> AppResult<Option<PostWithMeta>> {
        sqlx::query_as::<_, PostWithMeta>(&format!("{POST_WITH_META} WHERE p.id = $2"))
            .bind(viewer_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// List all posts, newest first.
    pub async fn find_all(
        &self,
        viewer_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;

        let posts = sqlx::query_as::<_, PostWithMeta>(&format!(
            "{POST_WITH_META} ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(viewer_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List posts by a single author, newest first.
    pub async fn find_by_author(
        &self,
        viewer_id: Uuid,
        author_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count posts by author", e)
            })?;

        let posts = sqlx::query_as::<_, PostWithMeta>(&format!(
            "{POST_WITH_META} WHERE p.author_id = $2 \
             ORDER BY p.created_at DESC LIMIT $3 OFFSET $4"
        ))
        .bind(viewer_id)
        .bind(author_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list posts by author", e)
        })?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Substring search over post bodies, newest first.
    pub async fn search(
        &self,
        viewer_id: Uuid,
        query: &str,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostWithMeta>> {
        let pattern = format!("%{query}%");

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE body ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count search results", e)
            })?;

        let posts = sqlx::query_as::<_, PostWithMeta>(&format!(
            "{POST_WITH_META} WHERE p.body ILIKE $2 \
             ORDER BY p.created_at DESC LIMIT $3 OFFSET $4"
        ))
        .bind(viewer_id)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search posts", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update a post's body.
    pub async fn update(&self, data: &UpdatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET body = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.body)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post {} not found", data.id)))
    }

    /// Delete a post, cascading its comments and likes via foreign keys
    /// and removing notifications that target the post or its comments
    /// in the same transaction, so no notification is left dangling.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "DELETE FROM notifications WHERE target_kind = $1 AND target_id IN \
             (SELECT id FROM comments WHERE post_id = $2)",
        )
        .bind(TargetKind::Comment)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete comment notifications", e)
        })?;

        sqlx::query("DELETE FROM notifications WHERE target_kind = $1 AND target_id = $2")
            .bind(TargetKind::Post)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete post notifications", e)
            })?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit post delete", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
