//! User Name Value Object
//!
//! Display name shown next to blogs and comments. Names are not unique.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum name length in characters (matches the storage column)
pub const USER_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Trim and validate a submitted name
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::value("name", "Name cannot be empty."));
        }
        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::value(
                "name",
                format!("Name must be at most {USER_NAME_MAX_LENGTH} characters."),
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
