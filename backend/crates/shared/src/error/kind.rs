//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum: the four API failure kinds plus the
//! non-API `Internal` kind used for infrastructure failures.

use serde::Serialize;

/// Error classification
///
/// The first four variants form the API error taxonomy. Each maps to a
/// fixed HTTP status code and a default wire code that clients match on.
/// `Internal` is reserved for failures outside the taxonomy (database,
/// I/O) and always renders as a 500 with a generic body.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::ResourceNotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.code(), "value:notfound");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// 400 - a specific input field failed validation
    ValueError,
    /// 404 - a referenced entity id does not resolve
    ResourceNotFound,
    /// 403 - caller lacks the required privilege or is not signed in
    Permission,
    /// 400 - business-rule violation not tied to a single field
    Generic,
    /// 500 - infrastructure failure, not part of the API taxonomy
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ValueError.status_code(), 400);
    /// assert_eq!(ErrorKind::Permission.status_code(), 403);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::ValueError | ErrorKind::Generic => 400,
            ErrorKind::Permission => 403,
            ErrorKind::ResourceNotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// Default wire code written to the `error` field of a response body
    ///
    /// `Generic` errors normally carry their own code (e.g.
    /// `register:failed`); this is only the fallback.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::ValueError => "value:invalid",
            ErrorKind::ResourceNotFound => "value:notfound",
            ErrorKind::Permission => "permission:forbidden",
            ErrorKind::Generic => "generic",
            ErrorKind::Internal => "internal",
        }
    }

    /// Human-readable name of the kind
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValueError => "Value Error",
            ErrorKind::ResourceNotFound => "Resource Not Found",
            ErrorKind::Permission => "Permission Denied",
            ErrorKind::Generic => "Request Failed",
            ErrorKind::Internal => "Internal Server Error",
        }
    }

    /// Whether this kind is a server-side failure (should be logged)
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Whether this kind is a caller error
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
