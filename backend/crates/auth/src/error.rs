//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email missing or malformed
    #[error("Invalid email.")]
    InvalidEmail,

    /// Password missing or not a client-side digest
    #[error("Invalid password.")]
    InvalidPassword,

    /// Display name missing or too long
    #[error("{0}")]
    InvalidName(String),

    /// Sign-in with an unknown address
    #[error("Email does not exist.")]
    EmailNotFound,

    /// Sign-in with the wrong password
    #[error("Invalid password.")]
    WrongPassword,

    /// Registration with an address already in use
    #[error("Email is already in use.")]
    EmailInUse,

    /// Admin-only operation attempted without admin rights
    #[error("Administrator privileges required.")]
    AdminRequired,

    /// Operation needs a signed-in user
    #[error("Please sign in first.")]
    SignInRequired,

    /// Misconfigured auth settings
    #[error("Invalid auth configuration: {0}")]
    Config(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidEmail
            | AuthError::InvalidPassword
            | AuthError::InvalidName(_)
            | AuthError::EmailNotFound
            | AuthError::WrongPassword => ErrorKind::ValueError,
            AuthError::EmailInUse => ErrorKind::Generic,
            AuthError::AdminRequired | AuthError::SignInRequired => ErrorKind::Permission,
            AuthError::Config(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = self.to_string();
        match self {
            AuthError::InvalidEmail | AuthError::EmailNotFound => AppError::value("email", message),
            AuthError::InvalidPassword | AuthError::WrongPassword => {
                AppError::value("password", message)
            }
            AuthError::InvalidName(_) => AppError::value("name", message),
            AuthError::EmailInUse => {
                AppError::generic("register:failed", message).with_field("email")
            }
            AuthError::AdminRequired | AuthError::SignInRequired => AppError::permission(message),
            AuthError::Config(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal(message)
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Config(msg) => {
                tracing::error!(message = %msg, "Auth configuration error");
            }
            AuthError::WrongPassword => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
