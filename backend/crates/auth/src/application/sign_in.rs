//! Sign In Use Case
//!
//! Checks an email/password pair and issues a session token.

use std::sync::Arc;

use platform::password::SubmittedPassword;

use crate::application::config::AuthConfig;
use crate::application::session_codec::{IssuedToken, SessionTokenCodec};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    /// Client-side digest of the password
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed-in user, redacted
    pub user: User,
    /// Session token for cookie
    pub session: IssuedToken,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.is_empty() {
            return Err(AuthError::InvalidEmail);
        }
        let password =
            SubmittedPassword::new(input.password).map_err(|_| AuthError::InvalidPassword)?;

        // Lookup matches the stored text exactly; no format check on sign-in
        let email = Email::from_db(input.email);
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        if !user.verify_password(&password) {
            return Err(AuthError::WrongPassword);
        }

        let codec = SessionTokenCodec::new(self.config.clone());
        let session = codec.issue(&user, self.config.session_ttl);

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignInOutput {
            user: user.redacted(),
            session,
        })
    }
}
