//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// A required text field is blank after trimming
    #[error("{0} cannot be empty.")]
    EmptyField(&'static str),

    /// A text field exceeds its column width
    #[error("{field} must be at most {max} characters.")]
    FieldTooLong { field: &'static str, max: usize },

    /// Blog id does not resolve
    #[error("Blog not found.")]
    BlogNotFound,

    /// Comment id does not resolve
    #[error("Comment not found.")]
    CommentNotFound,

    /// Caller is anonymous or lacks admin rights
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::EmptyField(_) | BlogError::FieldTooLong { .. } => ErrorKind::ValueError,
            BlogError::BlogNotFound | BlogError::CommentNotFound => ErrorKind::ResourceNotFound,
            BlogError::Auth(e) => e.kind(),
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BlogError::EmptyField(field) | BlogError::FieldTooLong { field, .. } => {
                AppError::value(*field, self.to_string())
            }
            BlogError::BlogNotFound => AppError::not_found("Blog"),
            BlogError::CommentNotFound => AppError::not_found("Comment"),
            BlogError::Auth(e) => e.to_app_error(),
            BlogError::Database(_) | BlogError::Internal(_) => AppError::internal(self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Auth(AuthError::AdminRequired) => {
                tracing::warn!("Admin operation refused");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field() {
        let err = BlogError::EmptyField("summary").to_app_error();
        assert_eq!(err.code(), "value:invalid");
        assert_eq!(err.field(), Some("summary"));
        assert_eq!(err.message(), "summary cannot be empty.");
    }

    #[test]
    fn test_field_too_long() {
        let err = BlogError::FieldTooLong {
            field: "name",
            max: 50,
        }
        .to_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.field(), Some("name"));
        assert_eq!(err.message(), "name must be at most 50 characters.");
    }

    #[test]
    fn test_not_found() {
        let err = BlogError::BlogNotFound.to_app_error();
        assert_eq!(err.code(), "value:notfound");
        assert_eq!(err.field(), Some("Blog"));
        assert_eq!(BlogError::CommentNotFound.status_code(), 404);
    }

    #[test]
    fn test_auth_errors_pass_through() {
        let err = BlogError::from(AuthError::SignInRequired);
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.to_app_error().message(), "Please sign in first.");
    }
}
