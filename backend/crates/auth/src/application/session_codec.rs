//! Session Token Codec
//!
//! Stateless session cookies. A token is three dash-separated fields:
//!
//! ```text
//! <user_id>-<expires_at>-<sha1hex(user_id "-" password_hash "-" expires_at "-" secret)>
//! ```
//!
//! The signature covers the stored password hash, so changing a password
//! invalidates every token issued before the change. `expires_at` is carried
//! for the signature only; decoding does not compare it with the clock and
//! freshness is left to the cookie Max-Age.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use kernel::id::UserId;
use platform::crypto::{constant_time_eq, sha1_hex};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;

/// Field separator inside a token
pub const TOKEN_SEPARATOR: char = '-';

/// Borrowed view of the three token fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken<'a> {
    pub user_id: &'a str,
    /// Unix seconds as written at issuance
    pub expires_at: &'a str,
    pub signature: &'a str,
}

impl<'a> SessionToken<'a> {
    /// Split a raw cookie value; anything but exactly three fields is rejected
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut fields = raw.split(TOKEN_SEPARATOR);
        let user_id = fields.next()?;
        let expires_at = fields.next()?;
        let signature = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            user_id,
            expires_at,
            signature,
        })
    }
}

impl fmt::Display for SessionToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.user_id,
            self.expires_at,
            self.signature,
            sep = TOKEN_SEPARATOR
        )
    }
}

/// Freshly encoded token with the lifetime it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub value: String,
    pub ttl: Duration,
}

/// Encodes users into session tokens and verifies them back
#[derive(Debug, Clone)]
pub struct SessionTokenCodec {
    config: Arc<AuthConfig>,
}

impl SessionTokenCodec {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Encode `user` into a token valid for `ttl` from now
    ///
    /// `user` must carry its stored hash; a redacted user yields a token
    /// that never verifies.
    pub fn encode(&self, user: &User, ttl: Duration) -> String {
        self.encode_at(user, ttl, Utc::now().timestamp())
    }

    /// Encode against an explicit clock reading (unix seconds)
    pub fn encode_at(&self, user: &User, ttl: Duration, now: i64) -> String {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let expires_at = now.saturating_add(ttl_secs).to_string();
        let signature = self.sign(user.id.as_str(), &user.password_hash, &expires_at);

        SessionToken {
            user_id: user.id.as_str(),
            expires_at: &expires_at,
            signature: &signature,
        }
        .to_string()
    }

    /// Encode and keep the lifetime alongside, for the cookie Max-Age
    pub fn issue(&self, user: &User, ttl: Duration) -> IssuedToken {
        IssuedToken {
            value: self.encode(user, ttl),
            ttl,
        }
    }

    /// Verify a token and load its user
    ///
    /// Every failure (malformed token, unknown user, lookup error or
    /// timeout, signature mismatch) yields `None`. The returned user is
    /// redacted.
    pub async fn decode<R>(&self, raw: &str, users: &R) -> Option<User>
    where
        R: UserRepository,
    {
        if raw.is_empty() {
            return None;
        }

        let Some(token) = SessionToken::parse(raw) else {
            tracing::debug!("Malformed session token");
            return None;
        };

        let Ok(user_id) = UserId::parse(token.user_id) else {
            tracing::debug!("Session token carries an invalid user id");
            return None;
        };

        let lookup = users.find_by_id(&user_id);
        let user = match tokio::time::timeout(self.config.user_lookup_timeout, lookup).await {
            Ok(Ok(Some(user))) => user,
            Ok(Ok(None)) => {
                tracing::debug!(user_id = %user_id, "Session user not found");
                return None;
            }
            Ok(Err(e)) => {
                tracing::warn!(user_id = %user_id, error = %e, "Session user lookup failed");
                return None;
            }
            Err(_) => {
                tracing::warn!(user_id = %user_id, "Session user lookup timed out");
                return None;
            }
        };

        let expected = self.sign(user.id.as_str(), &user.password_hash, token.expires_at);
        if !constant_time_eq(expected.as_bytes(), token.signature.as_bytes()) {
            tracing::info!(user_id = %user_id, "Invalid session signature");
            return None;
        }

        Some(user.redacted())
    }

    fn sign(&self, user_id: &str, password_hash: &str, expires_at: &str) -> String {
        let sep: &[u8] = &[TOKEN_SEPARATOR as u8];
        sha1_hex(&[
            user_id.as_bytes(),
            sep,
            password_hash.as_bytes(),
            sep,
            expires_at.as_bytes(),
            sep,
            self.config.session_secret.as_bytes(),
        ])
    }
}
