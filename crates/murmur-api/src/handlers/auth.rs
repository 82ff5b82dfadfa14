//! Auth handlers — register, login, refresh, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use murmur_service::auth::service::RegisterRequest as ServiceRegisterRequest;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, TokenResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::handlers::validate;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<LoginResponse>>)> {
    validate(&req)?;

    let (user, tokens) = state
        .auth_service
        .register(ServiceRegisterRequest {
            username: req.username,
            email: req.email,
            password: req.password,
            display_name: req.display_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            access_expires_at: tokens.access_expires_at,
            refresh_expires_at: tokens.refresh_expires_at,
            user: user.into(),
        })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    validate(&req)?;

    let (user, tokens) = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
        user: user.into(),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    let tokens = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
