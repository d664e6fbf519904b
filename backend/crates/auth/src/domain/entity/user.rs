//! User Entity
//!
//! A registered account. The password hash never leaves the auth layer:
//! anything handed to request handlers has gone through [`User::redacted`].

use std::fmt;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::{PASSWORD_PLACEHOLDER, SubmittedPassword, avatar_url};

use crate::domain::value_object::{email::Email, user_name::UserName};

#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    /// `sha1_hex("<id>:<submitted>")`, or the placeholder once redacted
    pub password_hash: String,
    pub admin: bool,
    pub name: UserName,
    /// Avatar URL
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, non-admin user
    pub fn new(email: Email, name: UserName, password: &SubmittedPassword) -> Self {
        let id = UserId::new();
        let password_hash = password.hash_for(id.as_str());
        let image = avatar_url(email.as_str());

        Self {
            id,
            email,
            password_hash,
            admin: false,
            name,
            image,
            created_at: Utc::now(),
        }
    }

    /// Replace the stored password
    ///
    /// Changing the hash invalidates every session cookie issued before.
    pub fn change_password(&mut self, password: &SubmittedPassword) {
        self.password_hash = password.hash_for(self.id.as_str());
    }

    /// Check a submitted password against the stored hash
    pub fn verify_password(&self, password: &SubmittedPassword) -> bool {
        !self.is_redacted() && password.verify(self.id.as_str(), &self.password_hash)
    }

    /// Copy safe to expose outside the auth layer
    pub fn redacted(mut self) -> Self {
        self.password_hash = PASSWORD_PLACEHOLDER.to_string();
        self
    }

    pub fn is_redacted(&self) -> bool {
        self.password_hash == PASSWORD_PLACEHOLDER
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &PASSWORD_PLACEHOLDER)
            .field("admin", &self.admin)
            .field("name", &self.name)
            .field("image", &self.image)
            .field("created_at", &self.created_at)
            .finish()
    }
}
