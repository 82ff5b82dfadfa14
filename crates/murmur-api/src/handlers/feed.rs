//! Home feed handler.

use axum::Json;
use axum::extract::{Query, State};

use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/feed
pub async fn get_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = state
        .feed_service
        .get_feed(&auth, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}
