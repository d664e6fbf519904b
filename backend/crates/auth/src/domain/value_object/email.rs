//! Email Value Object
//!
//! Registration accepts lowercase addresses only; the pattern is checked as
//! submitted, without trimming or case folding.

use std::sync::LazyLock;

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum email length (matches the storage column)
pub const EMAIL_MAX_LENGTH: usize = 50;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._-]+@[a-z0-9_-]+(\.[a-z0-9_-]+){1,4}$").ok());

fn matches_pattern(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH || !matches_pattern(&email) {
            return Err(AppError::value("email", "Invalid email."));
        }

        Ok(Self(email))
    }

    /// Wrap an address without validation
    ///
    /// Used for stored rows and for sign-in lookups, which match on the
    /// exact text.
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
