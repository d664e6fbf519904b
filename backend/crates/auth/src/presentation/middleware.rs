//! Auth Middleware
//!
//! Identity resolution for every request, plus the browser-route gate.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::cookie::extract_cookie;

use crate::application::identity::{self, Identity};
use crate::application::session_codec::SessionTokenCodec;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::AuthAppState;

/// Browser sign-in page that gated pages redirect to
pub const SIGN_IN_PATH: &str = "/signin";

/// Resolve the session cookie and store the [`Identity`] in request extensions
///
/// Never rejects: a missing or invalid cookie resolves to anonymous.
pub async fn resolve_identity<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let cookie = extract_cookie(req.headers(), &state.config.session_cookie_name);
    let codec = SessionTokenCodec::new(state.config.clone());

    let identity =
        identity::resolve_identity(cookie.as_deref(), &codec, state.repo.as_ref()).await;

    req.extensions_mut().insert(identity);
    next.run(req).await
}

/// Redirect browser routes to the sign-in page unless an admin is signed in
pub async fn require_admin_page(req: Request, next: Next) -> Response {
    let is_admin = req
        .extensions()
        .get::<Identity>()
        .is_some_and(Identity::is_admin);

    if !is_admin {
        return (StatusCode::FOUND, [(header::LOCATION, SIGN_IN_PATH)]).into_response();
    }

    next.run(req).await
}

/// Extract the identity resolved by [`resolve_identity`]
///
/// Routes mounted without the middleware see every caller as anonymous.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Identity>()
            .cloned()
            .unwrap_or_default())
    }
}
