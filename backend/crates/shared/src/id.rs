//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! Identifiers are opaque strings built by [`next_id`]: a zero-padded
//! millisecond timestamp, 32 hex characters of a random UUID v4 and a
//! `000` suffix. They sort by creation time and never contain `-`, which
//! the session cookie uses as its field separator.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// Character that must never appear in an identifier
pub const ID_SEPARATOR: char = '-';

/// Maximum identifier length (matches the storage column)
pub const ID_MAX_LENGTH: usize = 50;

/// Identifier parse failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Identifier cannot be empty")]
    Empty,
    #[error("Identifier must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
    #[error("Identifier must not contain '{0}'")]
    ContainsSeparator(char),
}

/// Generate a new time-ordered identifier
///
/// ```
/// let id = kernel::id::next_id();
/// assert_eq!(id.len(), 50);
/// assert!(!id.contains('-'));
/// ```
pub fn next_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{:015}{}000", millis, Uuid::new_v4().simple())
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type BlogId = Id<markers::Blog>;
///
/// let id = BlogId::new();
/// assert!(BlogId::parse(id.as_str()).is_ok());
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new identifier
    pub fn new() -> Self {
        Self {
            value: next_id(),
            _marker: PhantomData,
        }
    }

    /// Parse an identifier supplied by a caller
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let value = raw.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if value.len() > ID_MAX_LENGTH {
            return Err(IdError::TooLong {
                max: ID_MAX_LENGTH,
                actual: value.len(),
            });
        }
        if value.contains(ID_SEPARATOR) {
            return Err(IdError::ContainsSeparator(ID_SEPARATOR));
        }
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Create from a stored value (assumed already valid)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_db(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Blog IDs
    pub struct Blog;

    /// Marker for Comment IDs
    pub struct Comment;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type BlogId = Id<markers::Blog>;
pub type CommentId = Id<markers::Comment>;
