//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Author, Blog, Comment};
pub use repository::{BlogRepository, CommentRepository};
