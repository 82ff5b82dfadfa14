//! User handlers — profiles, follow graph.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use murmur_service::user::service::{UpdateProfileRequest as ServiceUpdateProfile, UserProfile};

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_service
        .update_profile(
            &auth,
            ServiceUpdateProfile {
                email: req.email,
                display_name: req.display_name,
                bio: req.bio,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<UserProfile>>> {
    let profile = state.user_service.get_by_id(&auth, id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/users/by-username/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ApiResponse<UserProfile>>> {
    let profile = state.user_service.get_by_username(&auth, &username).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/users/by-username/{username}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .user_service
        .followers(&username, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/users/by-username/{username}/following
pub async fn list_following(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .user_service
        .following(&username, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// POST /api/users/{id}/follow
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<ApiResponse<MessageResponse>>)> {
    let created = state.graph_service.follow(&auth, id).await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Now following")
    } else {
        (StatusCode::OK, "Already following")
    };

    Ok((status, Json(ApiResponse::ok(MessageResponse::new(message)))))
}

/// DELETE /api/users/{id}/follow
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let removed = state.graph_service.unfollow(&auth, id).await?;

    let message = if removed {
        "Unfollowed"
    } else {
        "Was not following"
    };

    Ok(Json(ApiResponse::ok(MessageResponse::new(message))))
}
