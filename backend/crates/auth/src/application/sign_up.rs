//! Sign Up Use Case
//!
//! Registers a new user and signs them in.

use std::sync::Arc;

use platform::password::SubmittedPassword;

use crate::application::config::AuthConfig;
use crate::application::session_codec::{IssuedToken, SessionTokenCodec};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub name: String,
    /// Client-side SHA-1 digest of the password (40 lowercase hex chars)
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// Created user, redacted
    pub user: User,
    pub session: IssuedToken,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Checked in this order: name, email, password
        let name = UserName::new(&input.name)
            .map_err(|e| AuthError::InvalidName(e.message().to_string()))?;
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidEmail)?;
        let password = SubmittedPassword::client_digest(input.password)
            .map_err(|_| AuthError::InvalidPassword)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailInUse);
        }

        let user = User::new(email, name, &password);
        self.repo.create(&user).await?;

        let codec = SessionTokenCodec::new(self.config.clone());
        let session = codec.issue(&user, self.config.session_ttl);

        tracing::info!(user_id = %user.id, "User registered");

        Ok(SignUpOutput {
            user: user.redacted(),
            session,
        })
    }
}
