//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct, the [`AppResult<T>`] alias and the
//! serializable [`ErrorBody`] that the response boundary emits.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ErrorKind;

/// Unified application error
///
/// Raised at the point a validation or authorization failure is detected
/// and returned unchanged up to the response boundary, where it is
/// rendered exactly once.
///
/// ## Fields
/// * `kind` - taxonomy kind (maps to the HTTP status code)
/// * `code` - wire code for the `error` member of the body
/// * `field` - offending input field, or the resource name for not-found
/// * `message` - human-readable explanation
/// * `source` - underlying error (optional, never serialized)
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::value("email", "Invalid email.");
/// assert_eq!(err.kind(), ErrorKind::ValueError);
/// assert_eq!(err.field(), Some("email"));
///
/// let err = AppError::generic("register:failed", "Email is already in use.")
///     .with_field("email");
/// assert_eq!(err.code(), "register:failed");
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: Cow<'static, str>,
    field: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Application result alias
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn find_blog(id: &str) -> AppResult<String> {
///     if id.is_empty() {
///         return Err(AppError::not_found("Blog"));
///     }
///     Ok(id.to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of a failed API call
///
/// `{"error": "value:invalid", "data": "email", "message": "Invalid email."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub message: String,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an error of the given kind with the kind's default wire code
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: Cow::Borrowed(kind.code()),
            field: None,
            message: message.into(),
            source: None,
        }
    }

    /// An input field failed validation
    #[inline]
    pub fn value(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::ValueError, message).with_field(field)
    }

    /// A referenced entity does not exist
    ///
    /// `resource` names the entity type (`"Blog"`, `"Comment"`) and is
    /// carried in the `data` member.
    #[inline]
    pub fn not_found(resource: impl Into<Cow<'static, str>>) -> Self {
        let resource = resource.into();
        let message = format!("{resource} not found.");
        Self::new(ErrorKind::ResourceNotFound, message).with_field(resource)
    }

    /// The caller lacks the required privilege or is anonymous
    #[inline]
    pub fn permission(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Permission, message).with_field("permission")
    }

    /// A business-rule failure with its own wire code
    #[inline]
    pub fn generic(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Generic, message).with_code(code)
    }

    /// Infrastructure failure outside the API taxonomy
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the offending field
    #[inline]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Override the wire code
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Attach the underlying error (debugging only, never serialized)
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn read_config() -> AppResult<String> {
    ///     std::fs::read_to_string("config.toml")
    ///         .map_err(|e| AppError::internal("Failed to read config").with_source(e))
    /// }
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    /// Build the response body
    ///
    /// Server errors never expose their message; it only goes to the logs.
    pub fn to_body(&self) -> ErrorBody {
        if self.is_server_error() {
            return ErrorBody {
                error: self.code.to_string(),
                data: None,
                message: self.kind.as_str().to_string(),
            };
        }

        ErrorBody {
            error: self.code.to_string(),
            data: self.field.as_ref().map(|f| f.to_string()),
            message: self.message.to_string(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        if let Some(field) = &self.field {
            builder.field("field", field);
        }
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_error() {
        let err = AppError::value("email", "Invalid email.");
        assert_eq!(err.kind(), ErrorKind::ValueError);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), "value:invalid");
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.message(), "Invalid email.");
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::value("name", "x").status_code(), 400);
        assert_eq!(AppError::not_found("Blog").status_code(), 404);
        assert_eq!(AppError::permission("x").status_code(), 403);
        assert_eq!(AppError::generic("register:failed", "x").status_code(), 400);
        assert_eq!(AppError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_not_found_names_resource() {
        let err = AppError::not_found("Comment");
        assert_eq!(err.code(), "value:notfound");
        assert_eq!(err.field(), Some("Comment"));
        assert_eq!(err.message(), "Comment not found.");
    }

    #[test]
    fn test_generic_keeps_custom_code() {
        let err = AppError::generic("register:failed", "Email is already in use.")
            .with_field("email");
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.code(), "register:failed");
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn test_body_is_lossless_for_client_errors() {
        let body = AppError::value("password", "Invalid password.").to_body();
        assert_eq!(
            body,
            ErrorBody {
                error: "value:invalid".to_string(),
                data: Some("password".to_string()),
                message: "Invalid password.".to_string(),
            }
        );
    }

    #[test]
    fn test_body_hides_server_error_details() {
        let body = AppError::internal("connection refused to 10.0.0.3").to_body();
        assert_eq!(body.error, "internal");
        assert_eq!(body.data, None);
        assert!(!body.message.contains("10.0.0.3"));
    }

    #[test]
    fn test_body_serialization() {
        let json = serde_json::to_value(AppError::permission("Please sign in first.").to_body())
            .unwrap();
        assert_eq!(json["error"], "permission:forbidden");
        assert_eq!(json["data"], "permission");
        assert_eq!(json["message"], "Please sign in first.");
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = AppError::internal("Failed to save").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Blog");
        assert_eq!(err.to_string(), "[value:notfound] Blog not found. (field: Blog)");
    }
}
