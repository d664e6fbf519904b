//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session_cookie;

pub use handlers::AuthAppState;
pub use middleware::{require_admin_page, resolve_identity};
pub use router::{auth_router, auth_router_generic, with_identity};
