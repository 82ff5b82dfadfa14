//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use murmur_auth::jwt::decoder::JwtDecoder;
use murmur_auth::jwt::encoder::JwtEncoder;
use murmur_auth::password::hasher::PasswordHasher;
use murmur_core::config::AppConfig;

use murmur_database::repositories::comment::CommentRepository;
use murmur_database::repositories::feed::FeedRepository;
use murmur_database::repositories::follow::FollowRepository;
use murmur_database::repositories::like::LikeRepository;
use murmur_database::repositories::notification::NotificationRepository;
use murmur_database::repositories::post::PostRepository;
use murmur_database::repositories::user::UserRepository;

use murmur_service::auth::service::AuthService;
use murmur_service::engagement::service::EngagementService;
use murmur_service::feed::service::FeedService;
use murmur_service::graph::service::GraphService;
use murmur_service::notification::service::NotificationService;
use murmur_service::post::service::PostService;
use murmur_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Auth service.
    pub auth_service: Arc<AuthService>,
    /// User profile service.
    pub user_service: Arc<UserService>,
    /// Follow graph service.
    pub graph_service: Arc<GraphService>,
    /// Like service.
    pub engagement_service: Arc<EngagementService>,
    /// Post and comment service.
    pub post_service: Arc<PostService>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Feed service.
    pub feed_service: Arc<FeedService>,
}

impl AppState {
    /// Wires repositories and services from the configuration and pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
        let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));
        let like_repo = Arc::new(LikeRepository::new(db_pool.clone()));
        let follow_repo = Arc::new(FollowRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let feed_repo = Arc::new(FeedRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
            &config.auth,
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&follow_repo),
        ));
        let graph_service = Arc::new(GraphService::new(
            Arc::clone(&user_repo),
            Arc::clone(&follow_repo),
        ));
        let engagement_service = Arc::new(EngagementService::new(
            Arc::clone(&post_repo),
            Arc::clone(&like_repo),
        ));
        let post_service = Arc::new(PostService::new(
            Arc::clone(&post_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&user_repo),
        ));
        let notification_service =
            Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
        let feed_service = Arc::new(FeedService::new(Arc::clone(&feed_repo)));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_decoder,
            auth_service,
            user_service,
            graph_service,
            engagement_service,
            post_service,
            notification_service,
            feed_service,
        }
    }
}
