//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod identity;
pub mod list_users;
pub mod session_codec;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::{AuthConfig, SessionSecret};
pub use identity::{Identity, require_admin, resolve_identity};
pub use list_users::{ListUsersOutput, ListUsersUseCase};
pub use session_codec::{IssuedToken, SessionToken, SessionTokenCodec};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
