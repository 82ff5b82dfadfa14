//! Registration, login, and token refresh.

use std::sync::Arc;

use tracing::info;

use murmur_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use murmur_auth::password::PasswordHasher;
use murmur_core::config::AuthConfig;
use murmur_core::error::AppError;
use murmur_database::repositories::user::UserRepository;
use murmur_entity::user::User;
use murmur_entity::user::model::CreateUser;

use crate::context::RequestContext;

/// Handles account creation and credential verification.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT encoder.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder.
    decoder: Arc<JwtDecoder>,
    /// Minimum password length.
    password_min_length: usize,
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Optional display name.
    pub display_name: Option<String>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
            password_min_length: config.password_min_length,
        }
    }

    /// Registers a new account and signs it in.
    pub async fn register(&self, req: RegisterRequest) -> Result<(User, TokenPair), AppError> {
        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::validation(
                "Username may only contain letters, digits, and underscores",
            ));
        }
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if req.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        // The unique constraint is the real arbiter; the repository maps
        // a duplicate username to a conflict error.
        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: req.email,
                password_hash,
                display_name: req.display_name,
            })
            .await?;

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "Account registered");

        Ok((user, tokens))
    }

    /// Authenticates a username + password pair.
    ///
    /// Unknown username and wrong password return the same error, so
    /// login probing cannot distinguish them.
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, TokenPair), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid username or password"));
        }

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;

        info!(user_id = %user.id, "User logged in");

        Ok((user, tokens))
    }

    /// Issues a fresh access token from a valid refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        // The account may have been deleted since the token was issued.
        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        self.encoder.generate_token_pair(user.id, &user.username)
    }

    /// Loads the authenticated user's own account record.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
