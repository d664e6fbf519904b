//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use kernel::page::DEFAULT_PAGE_SIZE;
use platform::cookie::CookieConfig;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AuthError, AuthResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Default session cookie name
pub const SESSION_COOKIE_NAME: &str = "awesession";

/// Default session lifetime (24 hours)
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(86400);

/// Default bound on the user lookup performed while decoding a cookie
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Server-side secret mixed into every session signature
///
/// Zeroized on drop, never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SessionSecret(String);

impl SessionSecret {
    pub fn new(secret: impl Into<String>) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::Config("session secret cannot be empty"));
        }
        Ok(Self(secret))
    }

    /// Random 32 byte secret, hex encoded
    pub fn random() -> Self {
        Self(platform::crypto::random_hex(32))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret([REDACTED])")
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Secret for session signatures
    pub session_secret: SessionSecret,
    /// Session lifetime, also the cookie Max-Age
    pub session_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy; `None` leaves the attribute out
    pub cookie_same_site: Option<SameSite>,
    /// Bound on the user lookup while decoding a cookie
    pub user_lookup_timeout: Duration,
    /// Users per page in the user listing
    pub page_size: u64,
}

impl AuthConfig {
    pub fn new(session_secret: SessionSecret) -> Self {
        Self {
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
            session_secret,
            session_ttl: DEFAULT_SESSION_TTL,
            cookie_secure: false,
            cookie_same_site: None,
            user_lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create config with a random session secret
    ///
    /// Cookies issued under a random secret stop verifying on restart.
    pub fn with_random_secret() -> Self {
        Self::new(SessionSecret::random())
    }

    /// Create config for development (random secret, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session lifetime in whole seconds
    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl.as_secs()
    }

    /// Cookie attributes for a session cookie living `max_age`
    pub fn cookie_config(&self, max_age: Duration) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(max_age.as_secs()),
        }
    }
}
