//! Post Error Types
//!
//! Post-specific error variants mapping into the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// A required request field is absent or empty
    #[error("All fields are required")]
    MissingFields,

    /// Missing fields on update.
    /// Existing clients receive 404 for this case, so the status is
    /// kept even though it is really a validation failure.
    #[error("All fields are required")]
    UpdateFieldsMissing,

    /// Authenticated identity missing from request context
    #[error("Not authorized")]
    NotAuthorized,

    /// Post not found
    #[error("Cannot find post with this id")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::MissingFields => StatusCode::BAD_REQUEST,
            PostError::UpdateFieldsMissing | PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::NotAuthorized => StatusCode::UNAUTHORIZED,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::MissingFields => ErrorKind::BadRequest,
            PostError::UpdateFieldsMissing | PostError::NotFound => ErrorKind::NotFound,
            PostError::NotAuthorized => ErrorKind::Unauthorized,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
