//! Post handlers — CRUD, listings, search, like/unlike.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use murmur_entity::post::model::{Post, PostWithMeta};

use crate::dto::request::{PostBodyRequest, SearchParams};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PostBodyRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Post>>)> {
    validate(&req)?;
    let post = state.post_service.create(&auth, req.body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post))))
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .post_service
        .list(&auth, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/posts/search?q=…
pub async fn search_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(search): Query<SearchParams>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .post_service
        .search(&auth, &search.q, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/users/by-username/{username}/posts
pub async fn list_posts_by_author(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .post_service
        .list_by_author(&auth, &username, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<PostWithMeta>>> {
    let post = state.post_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PostBodyRequest>,
) -> ApiResult<Json<ApiResponse<Post>>> {
    validate(&req)?;
    let post = state.post_service.update(&auth, id, req.body).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.post_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Post deleted"))))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<ApiResponse<MessageResponse>>)> {
    let created = state.engagement_service.like(&auth, id).await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Liked")
    } else {
        (StatusCode::OK, "Already liked")
    };

    Ok((status, Json(ApiResponse::ok(MessageResponse::new(message)))))
}

/// DELETE /api/posts/{id}/like
pub async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let removed = state.engagement_service.unlike(&auth, id).await?;

    let message = if removed { "Unliked" } else { "Was not liked" };

    Ok(Json(ApiResponse::ok(MessageResponse::new(message))))
}
