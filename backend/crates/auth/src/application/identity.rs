//! Request Identity
//!
//! Who is making the current request, resolved once from the session
//! cookie before any handler runs.

use crate::application::session_codec::SessionTokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Resolved identity of a request
///
/// The user, when present, is always redacted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    User(User),
}

impl Identity {
    pub fn user(&self) -> Option<&User> {
        match self {
            Identity::Anonymous => None,
            Identity::User(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::User(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.admin)
    }

    /// The signed-in user, or a Permission error
    pub fn require_user(&self) -> AuthResult<&User> {
        self.user().ok_or(AuthError::SignInRequired)
    }
}

/// Resolve a session cookie value to an identity
///
/// An absent or invalid cookie is anonymous, never an error.
pub async fn resolve_identity<R>(
    cookie: Option<&str>,
    codec: &SessionTokenCodec,
    users: &R,
) -> Identity
where
    R: UserRepository,
{
    let Some(cookie) = cookie.filter(|c| !c.is_empty()) else {
        return Identity::Anonymous;
    };

    match codec.decode(cookie, users).await {
        Some(user) => {
            tracing::debug!(user_id = %user.id, "Resolved session user");
            Identity::User(user)
        }
        None => Identity::Anonymous,
    }
}

/// Admin gate: anonymous callers and non-admin users are refused
pub fn require_admin(identity: &Identity) -> AuthResult<&User> {
    match identity.user() {
        Some(user) if user.admin => Ok(user),
        _ => Err(AuthError::AdminRequired),
    }
}
