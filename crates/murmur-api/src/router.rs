//! Route definitions for the Murmur HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use murmur_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(notification_routes())
        .merge(feed_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile and follow graph endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me", put(handlers::user::update_profile))
        .route("/users/{id}", get(handlers::user::get_user))
        .route(
            "/users/by-username/{username}",
            get(handlers::user::get_user_by_username),
        )
        .route(
            "/users/by-username/{username}/followers",
            get(handlers::user::list_followers),
        )
        .route(
            "/users/by-username/{username}/following",
            get(handlers::user::list_following),
        )
        .route(
            "/users/by-username/{username}/posts",
            get(handlers::post::list_posts_by_author),
        )
        .route("/users/{id}/follow", post(handlers::user::follow))
        .route("/users/{id}/follow", delete(handlers::user::unfollow))
}

/// Post CRUD, search, and likes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(handlers::post::list_posts))
        .route("/posts", post(handlers::post::create_post))
        .route("/posts/search", get(handlers::post::search_posts))
        .route("/posts/{id}", get(handlers::post::get_post))
        .route("/posts/{id}", put(handlers::post::update_post))
        .route("/posts/{id}", delete(handlers::post::delete_post))
        .route("/posts/{id}/like", post(handlers::post::like_post))
        .route("/posts/{id}/like", delete(handlers::post::unlike_post))
}

/// Comment endpoints
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/{id}/comments",
            post(handlers::comment::create_comment),
        )
        .route(
            "/posts/{id}/comments",
            get(handlers::comment::list_comments),
        )
        .route("/comments/{id}", delete(handlers::comment::delete_comment))
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Home feed
fn feed_routes() -> Router<AppState> {
    Router::new().route("/feed", get(handlers::feed::get_feed))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration
fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
