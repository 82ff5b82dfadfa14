//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    /// Account email.
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Email.
    pub email: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Bio.
    pub bio: Option<String>,
}

/// Create or update post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostBodyRequest {
    /// Post body text.
    #[validate(length(min = 1, max = 1000, message = "Body must be 1-1000 characters"))]
    pub body: String,
}

/// Create comment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentBodyRequest {
    /// Comment body text.
    #[validate(length(min = 1, max = 1000, message = "Body must be 1-1000 characters"))]
    pub body: String,
}

/// Search query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Substring to match against post bodies.
    pub q: String,
}
