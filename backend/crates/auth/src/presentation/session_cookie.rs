//! Session Cookie Helpers
//!
//! Writes and clears the session cookie on outgoing responses.

use axum::http::{HeaderMap, header};
use platform::cookie::{delete_cookie_header, set_cookie_header};

use crate::application::config::AuthConfig;
use crate::application::session_codec::IssuedToken;
use crate::error::{AuthError, AuthResult};

/// Attach the session cookie carrying `token`
///
/// HttpOnly, Max-Age equal to the token lifetime.
pub fn issue_cookie(headers: &mut HeaderMap, config: &AuthConfig, token: &IssuedToken) -> AuthResult<()> {
    let value = set_cookie_header(&config.cookie_config(token.ttl), &token.value)
        .map_err(|e| AuthError::Internal(format!("Invalid session cookie: {e}")))?;
    headers.append(header::SET_COOKIE, value);
    Ok(())
}

/// Attach a cookie that deletes the session cookie
pub fn clear_cookie(headers: &mut HeaderMap, config: &AuthConfig) -> AuthResult<()> {
    let value = delete_cookie_header(&config.cookie_config(config.session_ttl))
        .map_err(|e| AuthError::Internal(format!("Invalid session cookie: {e}")))?;
    headers.append(header::SET_COOKIE, value);
    Ok(())
}
