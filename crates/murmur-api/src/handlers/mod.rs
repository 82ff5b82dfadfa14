//! HTTP handlers, organized by domain.

pub mod auth;
pub mod comment;
pub mod feed;
pub mod health;
pub mod notification;
pub mod post;
pub mod user;

use murmur_core::error::AppError;
use validator::Validate;

/// Runs DTO validation, collapsing failures into one validation error.
pub(crate) fn validate(req: &impl Validate) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
