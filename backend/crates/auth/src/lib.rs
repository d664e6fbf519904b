//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, session codec, request identity
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and sign-in with email + client-hashed password
//! - Stateless signed session cookies
//! - Per-request identity resolution and admin gate
//!
//! ## Security Model
//! - Passwords stored as `sha1(id ":" digest)`
//! - Session signatures cover the stored password hash, so a password
//!   change revokes existing sessions
//! - Users leaving this crate are redacted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::{AuthConfig, SessionSecret};
pub use application::identity::{Identity, require_admin};
pub use application::session_codec::SessionTokenCodec;
pub use domain::entity::user::User;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, with_identity};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
