//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::resolve_identity;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: Arc<PgUserRepository>, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/api/authenticate", post(handlers::authenticate::<R>))
        .route(
            "/api/users",
            get(handlers::list_users::<R>).post(handlers::register::<R>),
        )
        .route("/api/me", get(handlers::current_user))
        .route("/signout", get(handlers::sign_out::<R>))
        .with_state(state)
}

/// Resolve the session identity ahead of every route in `router`
pub fn with_identity<R>(router: Router, repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };
    router.layer(middleware::from_fn_with_state(state, resolve_identity::<R>))
}
