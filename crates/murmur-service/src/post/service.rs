//! Post CRUD, search, and comments.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use murmur_core::error::AppError;
use murmur_core::types::pagination::{PageRequest, PageResponse};
use murmur_database::repositories::comment::CommentRepository;
use murmur_database::repositories::post::PostRepository;
use murmur_database::repositories::user::UserRepository;
use murmur_entity::post::comment::{Comment, CommentWithAuthor, CreateComment};
use murmur_entity::post::model::{CreatePost, Post, PostWithMeta, UpdatePost};

use crate::context::RequestContext;
use crate::notification::fanout::comment_recipient;

/// Maximum length of a post or comment body, in characters.
const MAX_BODY_CHARS: usize = 1000;

/// Handles post lifecycle, listings, and comments.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// User repository for author lookups.
    user_repo: Arc<UserRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        post_repo: Arc<PostRepository>,
        comment_repo: Arc<CommentRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            user_repo,
        }
    }

    fn validate_body(body: &str) -> Result<(), AppError> {
        if body.trim().is_empty() {
            return Err(AppError::validation("Body cannot be empty"));
        }
        if body.chars().count() > MAX_BODY_CHARS {
            return Err(AppError::validation(format!(
                "Body exceeds {MAX_BODY_CHARS} characters"
            )));
        }
        Ok(())
    }

    /// Creates a post authored by the current user.
    pub async fn create(&self, ctx: &RequestContext, body: String) -> Result<Post, AppError> {
        Self::validate_body(&body)?;

        let post = self
            .post_repo
            .create(&CreatePost {
                author_id: ctx.user_id,
                body,
            })
            .await?;

        info!(user_id = %ctx.user_id, post_id = %post.id, "Post created");

        Ok(post)
    }

    /// Gets a single post with author and engagement metadata.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<PostWithMeta, AppError> {
        self.post_repo
            .find_with_meta(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))
    }

    /// Lists all posts, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        self.post_repo.find_all(ctx.user_id, page).await
    }

    /// Lists a user's posts by username, newest first.
    pub async fn list_by_author(
        &self,
        ctx: &RequestContext,
        username: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        let author = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        self.post_repo
            .find_by_author(ctx.user_id, author.id, page)
            .await
    }

    /// Substring search over post bodies, newest first.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        query: &str,
        page: &PageRequest,
    ) -> Result<PageResponse<PostWithMeta>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Search query cannot be empty"));
        }

        self.post_repo.search(ctx.user_id, query, page).await
    }

    /// Updates a post's body. Author only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        body: String,
    ) -> Result<Post, AppError> {
        Self::validate_body(&body)?;

        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))?;

        if post.author_id != ctx.user_id {
            return Err(AppError::authorization("Only the author may edit a post"));
        }

        let updated = self.post_repo.update(&UpdatePost { id, body }).await?;

        info!(user_id = %ctx.user_id, post_id = %id, "Post updated");

        Ok(updated)
    }

    /// Deletes a post and everything hanging off it. Author only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))?;

        if post.author_id != ctx.user_id {
            return Err(AppError::authorization("Only the author may delete a post"));
        }

        self.post_repo.delete(id).await?;

        info!(user_id = %ctx.user_id, post_id = %id, "Post deleted");

        Ok(())
    }

    /// Adds a comment to a post, fanning out a notification to the post
    /// author when the commenter is someone else.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        body: String,
    ) -> Result<Comment, AppError> {
        Self::validate_body(&body)?;

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_id} not found")))?;

        let notify_recipient = comment_recipient(ctx.user_id, post.author_id);

        let comment = self
            .comment_repo
            .create(
                &CreateComment {
                    post_id,
                    author_id: ctx.user_id,
                    body,
                },
                notify_recipient,
            )
            .await?;

        info!(user_id = %ctx.user_id, post_id = %post_id, comment_id = %comment.id, "Comment added");

        Ok(comment)
    }

    /// Lists a post's comments in conversation order (oldest first).
    pub async fn list_comments(
        &self,
        post_id: Uuid,
        page: &PageRequest,
    ) -> Result<PageResponse<CommentWithAuthor>, AppError> {
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::not_found(format!("Post {post_id} not found")));
        }

        self.comment_repo.find_by_post(post_id, page).await
    }

    /// Deletes a comment. Allowed for the comment author or the author
    /// of the post it sits on.
    pub async fn delete_comment(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))?;

        if comment.author_id != ctx.user_id {
            let post = self
                .post_repo
                .find_by_id(comment.post_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Post {} not found", comment.post_id)))?;

            if post.author_id != ctx.user_id {
                return Err(AppError::authorization(
                    "Only the comment author or the post author may delete a comment",
                ));
            }
        }

        self.comment_repo.delete(id).await?;

        info!(user_id = %ctx.user_id, comment_id = %id, "Comment deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use murmur_core::error::ErrorKind;
    use sqlx::PgPool;

    // A lazy pool never opens a connection; these tests only exercise
    // the validation guards that return before any query runs.
    fn service() -> PostService {
        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        PostService::new(
            Arc::new(PostRepository::new(pool.clone())),
            Arc::new(CommentRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool)),
        )
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), "ada".to_string())
    }

    #[tokio::test]
    async fn create_rejects_blank_body() {
        let err = service().create(&ctx(), "   ".to_string()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn create_rejects_oversized_body() {
        let body = "x".repeat(MAX_BODY_CHARS + 1);
        let err = service().create(&ctx(), body).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn search_rejects_blank_query() {
        let err = service()
            .search(&ctx(), "  ", &PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
