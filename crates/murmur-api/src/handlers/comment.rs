//! Comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use murmur_entity::post::comment::Comment;

use crate::dto::request::CommentBodyRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate;
use crate::state::AppState;

/// POST /api/posts/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CommentBodyRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    validate(&req)?;
    let comment = state
        .post_service
        .add_comment(&auth, post_id, req.body)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .post_service
        .list_comments(post_id, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.post_service.delete_comment(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Comment deleted",
    ))))
}
