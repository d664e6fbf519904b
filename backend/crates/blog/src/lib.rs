//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Blog and comment entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Access Model
//! - Reading blogs and comments is public
//! - Commenting requires a signed-in user
//! - Writing or deleting blogs and deleting comments requires an admin
//!
//! Identity comes from `auth`; routes here expect the identity middleware
//! to run first.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BlogConfig;
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{blog_router, manage_router};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
