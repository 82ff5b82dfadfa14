//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use murmur_core::error::{AppError, ErrorKind};

/// HTTP-layer wrapper around the domain error.
///
/// `AppError` lives in `murmur-core` and `IntoResponse` in axum, so the
/// response conversion needs a type local to this crate. Handlers return
/// `ApiResult` and `?` lifts any `AppError` through the `From` impl.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP status and machine code for an error kind.
pub fn status_for(kind: &ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::SelfReference => (StatusCode::BAD_REQUEST, "SELF_REFERENCE"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::Database => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        ErrorKind::Configuration => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR"),
        ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZATION_ERROR"),
        ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(&self.0.kind);

        if status.is_server_error() {
            tracing::error!(error = %self.0.message, kind = %self.0.kind, "Request failed");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.0.message.clone(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_for(&ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&ErrorKind::SelfReference).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&ErrorKind::Conflict).0, StatusCode::CONFLICT);
        assert_eq!(
            status_for(&ErrorKind::Validation).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ErrorKind::Authentication).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&ErrorKind::Authorization).0,
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        for kind in [
            ErrorKind::Database,
            ErrorKind::Configuration,
            ErrorKind::Serialization,
            ErrorKind::Internal,
        ] {
            assert_eq!(status_for(&kind).0, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn domain_errors_render_as_responses() {
        let resp: Response = ApiError::from(AppError::not_found("no such post")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp: Response =
            ApiError::from(AppError::authorization("not the recipient")).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
