//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::extract::RequestBody;
use kernel::page::PageQuery;

use crate::application::config::AuthConfig;
use crate::application::identity::Identity;
use crate::application::{
    ListUsersUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{SignInRequest, SignUpRequest, UserListResponse, UserResponse};
use crate::presentation::session_cookie::{clear_cookie, issue_cookie};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/authenticate
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    RequestBody(req): RequestBody<SignInRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let mut headers = HeaderMap::new();
    issue_cookie(&mut headers, &state.config, &output.session)?;

    Ok((StatusCode::OK, headers, Json(UserResponse::from(&output.user))).into_response())
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    RequestBody(req): RequestBody<SignUpRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            email: req.email,
            name: req.name,
            password: req.password,
        })
        .await?;

    let mut headers = HeaderMap::new();
    issue_cookie(&mut headers, &state.config, &output.session)?;

    Ok((StatusCode::OK, headers, Json(UserResponse::from(&output.user))).into_response())
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /signout
///
/// Clears the cookie and sends the browser back where it came from.
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    identity: Identity,
    request_headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let location = request_headers
        .get(header::REFERER)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("/"));

    let mut headers = HeaderMap::new();
    clear_cookie(&mut headers, &state.config)?;
    headers.insert(header::LOCATION, location);

    if let Some(user) = identity.user() {
        tracing::info!(user_id = %user.id, "User signed out");
    }

    Ok((StatusCode::FOUND, headers).into_response())
}

// ============================================================================
// Users
// ============================================================================

/// GET /api/users?page=N
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<PageQuery>,
) -> AuthResult<Json<UserListResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone(), state.config.page_size);
    let output = use_case.execute(query.index()).await?;

    Ok(Json(UserListResponse {
        page: output.page,
        users: output.users.iter().map(UserResponse::from).collect(),
    }))
}

/// GET /api/me
pub async fn current_user(identity: Identity) -> Json<Option<UserResponse>> {
    Json(identity.user().map(UserResponse::from))
}
