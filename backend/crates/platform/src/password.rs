//! Credential Hashing
//!
//! Stored password format and the avatar digest.
//!
//! ## Stored format
//! `sha1_hex("<user_id>:<submitted>")`. Browsers submit the password
//! already hashed client-side (a 40 char lowercase SHA-1 hex string), so
//! the server never sees the original plaintext. The user id acts as the
//! only salt; this is a known weakness kept for compatibility with
//! existing rows and issued cookies.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, is_sha1_hex, md5_hex, sha1_hex};

/// Value that replaces a password hash once a user leaves the auth layer
pub const PASSWORD_PLACEHOLDER: &str = "******";

/// Gravatar endpoint used for generated avatar URLs
const AVATAR_BASE_URL: &str = "http://www.gravatar.com/avatar/";

// ============================================================================
// Error Types
// ============================================================================

/// Submitted password rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Nothing was submitted
    #[error("Password cannot be empty")]
    Empty,

    /// Registration requires the client-side SHA-1 digest
    #[error("Password must be a 40 character lowercase hex digest")]
    NotClientDigest,
}

// ============================================================================
// Submitted Password (Zeroized on drop)
// ============================================================================

/// Password as received in a request body
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SubmittedPassword(String);

impl SubmittedPassword {
    /// Accept any non-empty password (sign-in)
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    /// Accept only a client-side SHA-1 digest (registration)
    pub fn client_digest(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::new(raw)?;
        if !is_sha1_hex(&password.0) {
            return Err(PasswordPolicyError::NotClientDigest);
        }
        Ok(password)
    }

    /// Stored hash for this password under `user_id`
    pub fn hash_for(&self, user_id: &str) -> String {
        hash_password(user_id, &self.0)
    }

    /// Check against a stored hash in constant time
    pub fn verify(&self, user_id: &str, stored_hash: &str) -> bool {
        constant_time_eq(self.hash_for(user_id).as_bytes(), stored_hash.as_bytes())
    }
}

impl fmt::Debug for SubmittedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubmittedPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashing
// ============================================================================

/// Hash a password for storage: `sha1_hex(user_id ":" plaintext)`
pub fn hash_password(user_id: &str, plaintext: &str) -> String {
    sha1_hex(&[user_id.as_bytes(), b":".as_slice(), plaintext.as_bytes()])
}

/// Digest identifying an email address to the avatar service
///
/// MD5 of the address as stored, which is what Gravatar looks up.
pub fn hash_email_for_avatar(email: &str) -> String {
    md5_hex(email.as_bytes())
}

/// Public avatar URL for an email address
pub fn avatar_url(email: &str) -> String {
    format!(
        "{}{}?d=mm&s=120",
        AVATAR_BASE_URL,
        hash_email_for_avatar(email)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT_DIGEST: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

    #[test]
    fn test_hash_password_format() {
        assert_eq!(hash_password("u1", "pw"), sha1_hex(&[b"u1:pw".as_slice()]));
        assert_eq!(hash_password("u1", "pw").len(), 40);
    }

    #[test]
    fn test_hash_password_salted_by_user_id() {
        assert_ne!(hash_password("u1", "pw"), hash_password("u2", "pw"));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            SubmittedPassword::new(String::new()).unwrap_err(),
            PasswordPolicyError::Empty
        );
    }

    #[test]
    fn test_client_digest_required_for_registration() {
        assert_eq!(
            SubmittedPassword::client_digest("abc".to_string()).unwrap_err(),
            PasswordPolicyError::NotClientDigest
        );
        assert_eq!(
            SubmittedPassword::client_digest(CLIENT_DIGEST.to_uppercase()).unwrap_err(),
            PasswordPolicyError::NotClientDigest
        );
        assert!(SubmittedPassword::client_digest(CLIENT_DIGEST.to_string()).is_ok());
    }

    #[test]
    fn test_verify() {
        let password = SubmittedPassword::new(CLIENT_DIGEST.to_string()).unwrap();
        let stored = hash_password("u1", CLIENT_DIGEST);
        assert!(password.verify("u1", &stored));
        assert!(!password.verify("u2", &stored));

        let other = SubmittedPassword::new("something-else".to_string()).unwrap();
        assert!(!other.verify("u1", &stored));
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url("abc"),
            "http://www.gravatar.com/avatar/900150983cd24fb0d6963f7d28e17f72?d=mm&s=120"
        );
        assert_eq!(hash_email_for_avatar("a@b.com").len(), 32);
        assert_ne!(avatar_url("a@b.com"), avatar_url("b@b.com"));
    }

    #[test]
    fn test_debug_redaction() {
        let password = SubmittedPassword::new("secret".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }
}
