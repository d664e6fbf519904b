//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::page::Page;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Missing members deserialize as empty and fail validation with a field
/// error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    /// Client-side SHA-1 digest
    pub password: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Users
// ============================================================================

/// Public view of a user; the password hash is never serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub admin: bool,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.to_string(),
            admin: user.admin,
            name: user.name.to_string(),
            image: user.image.clone(),
            created_at: user.created_at,
        }
    }
}

/// Paged user listing
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub page: Page,
    pub users: Vec<UserResponse>,
}
