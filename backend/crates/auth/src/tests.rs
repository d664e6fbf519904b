//! Use-case and router tests against an in-memory user store

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use kernel::error::app_error::ErrorBody;
use kernel::id::UserId;
use platform::crypto::{md5_hex, sha1_hex};
use platform::password::{SubmittedPassword, hash_password};
use tower::ServiceExt;

use crate::application::config::{AuthConfig, SessionSecret};
use crate::application::identity::{Identity, require_admin, resolve_identity};
use crate::application::session_codec::SessionTokenCodec;
use crate::application::{
    ListUsersUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{UserListResponse, UserResponse};
use crate::presentation::router::{auth_router_generic, with_identity};

const DIGEST: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
const OTHER_DIGEST: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
const DAY: Duration = Duration::from_secs(86400);

// ============================================================================
// In-memory repositories
// ============================================================================

#[derive(Default)]
struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    fn get(&self, id: &UserId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailInUse);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(stored) = users.iter_mut().find(|u| u.id == user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn count(&self) -> AuthResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn list(&self, offset: u64, limit: u64) -> AuthResult<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// Every lookup fails
struct FailingUserRepository;

impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: &User) -> AuthResult<()> {
        Err(AuthError::Internal("down".to_string()))
    }

    async fn find_by_id(&self, _user_id: &UserId) -> AuthResult<Option<User>> {
        Err(AuthError::Internal("down".to_string()))
    }

    async fn find_by_email(&self, _email: &Email) -> AuthResult<Option<User>> {
        Err(AuthError::Internal("down".to_string()))
    }

    async fn exists_by_email(&self, _email: &Email) -> AuthResult<bool> {
        Err(AuthError::Internal("down".to_string()))
    }

    async fn update(&self, _user: &User) -> AuthResult<()> {
        Err(AuthError::Internal("down".to_string()))
    }

    async fn count(&self) -> AuthResult<u64> {
        Err(AuthError::Internal("down".to_string()))
    }

    async fn list(&self, _offset: u64, _limit: u64) -> AuthResult<Vec<User>> {
        Err(AuthError::Internal("down".to_string()))
    }
}

/// Lookups by id never finish in time
struct StalledUserRepository(MemoryUserRepository);

impl UserRepository for StalledUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.0.create(user).await
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        self.0.find_by_id(user_id).await
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.0.find_by_email(email).await
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        self.0.exists_by_email(email).await
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        self.0.update(user).await
    }

    async fn count(&self) -> AuthResult<u64> {
        self.0.count().await
    }

    async fn list(&self, offset: u64, limit: u64) -> AuthResult<Vec<User>> {
        self.0.list(offset, limit).await
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::new(SessionSecret::new("S").unwrap()))
}

fn codec() -> SessionTokenCodec {
    SessionTokenCodec::new(config())
}

fn user(email: &str, admin: bool) -> User {
    let mut user = User::new(
        Email::new(email).unwrap(),
        UserName::new("Tester").unwrap(),
        &SubmittedPassword::client_digest(DIGEST.to_string()).unwrap(),
    );
    user.admin = admin;
    user
}

fn fixed_user() -> User {
    User {
        id: UserId::from_db("u1"),
        email: Email::from_db("u1@example.com"),
        password_hash: "deadbeef".to_string(),
        admin: false,
        name: UserName::from_db("U"),
        image: String::new(),
        created_at: chrono::Utc::now(),
    }
}

// ============================================================================
// Session codec
// ============================================================================

#[tokio::test]
async fn test_round_trip_returns_redacted_user() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);

    let token = codec().encode(&alice, DAY);
    let decoded = codec().decode(&token, &repo).await.unwrap();

    assert_eq!(decoded.id, alice.id);
    assert_eq!(decoded.password_hash, "******");
    assert!(decoded.is_redacted());
}

#[tokio::test]
async fn test_known_token_layout() {
    let user = fixed_user();
    let token = codec().encode_at(&user, DAY, 1_000);

    let expected_sig = sha1_hex(&[b"u1-deadbeef-87400-S".as_slice()]);
    assert_eq!(token, format!("u1-87400-{expected_sig}"));
    assert_eq!(hex::decode(&expected_sig).unwrap().len(), 20);
}

#[tokio::test]
async fn test_tampered_signature_rejected() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);
    let token = codec().encode(&alice, DAY);

    let sig_start = token.rfind('-').unwrap() + 1;
    for pos in sig_start..token.len() {
        let mut bytes = token.clone().into_bytes();
        bytes[pos] = if bytes[pos] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(
            codec().decode(&tampered, &repo).await.is_none(),
            "tampered position {pos} accepted"
        );
    }
}

#[tokio::test]
async fn test_password_change_revokes_token() {
    let mut alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);
    let token = codec().encode(&alice, DAY);
    assert!(codec().decode(&token, &repo).await.is_some());

    alice.change_password(&SubmittedPassword::new(OTHER_DIGEST.to_string()).unwrap());
    repo.update(&alice).await.unwrap();

    assert!(codec().decode(&token, &repo).await.is_none());
}

#[tokio::test]
async fn test_expiry_and_payload_must_match_signature() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);
    let token = codec().encode(&alice, DAY);

    let fields: Vec<&str> = token.split('-').collect();
    let extended = format!("{}-{}-{}", fields[0], "99999999999", fields[2]);
    assert!(codec().decode(&extended, &repo).await.is_none());
}

#[tokio::test]
async fn test_elapsed_token_still_decodes() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);

    // Issued at the epoch for one second: long past
    let token = codec().encode_at(&alice, Duration::from_secs(1), 0);
    let decoded = codec().decode(&token, &repo).await;
    assert_eq!(decoded.map(|u| u.id), Some(alice.id));
}

#[tokio::test]
async fn test_malformed_tokens_are_invalid() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice]);

    for raw in ["", "garbage", "a-b", "a-b-c-d", "--", "u1-100-"] {
        assert!(codec().decode(raw, &repo).await.is_none(), "accepted {raw:?}");
    }
}

#[tokio::test]
async fn test_unknown_user_is_invalid() {
    let alice = user("alice@example.com", false);
    let token = codec().encode(&alice, DAY);
    let repo = MemoryUserRepository::default();

    assert!(codec().decode(&token, &repo).await.is_none());
}

#[tokio::test]
async fn test_secret_mismatch_is_invalid() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);
    let token = codec().encode(&alice, DAY);

    let other = SessionTokenCodec::new(Arc::new(AuthConfig::with_random_secret()));
    assert!(other.decode(&token, &repo).await.is_none());
}

#[tokio::test]
async fn test_lookup_failure_is_invalid() {
    let alice = user("alice@example.com", false);
    let token = codec().encode(&alice, DAY);

    assert!(codec().decode(&token, &FailingUserRepository).await.is_none());
}

#[tokio::test]
async fn test_lookup_timeout_is_invalid() {
    let alice = user("alice@example.com", false);
    let repo = StalledUserRepository(MemoryUserRepository::with_users(vec![alice.clone()]));

    let mut config = AuthConfig::new(SessionSecret::new("S").unwrap());
    config.user_lookup_timeout = Duration::from_millis(20);
    let codec = SessionTokenCodec::new(Arc::new(config));

    let token = codec.encode(&alice, DAY);
    assert!(codec.decode(&token, &repo).await.is_none());
}

// ============================================================================
// Identity gate
// ============================================================================

#[tokio::test]
async fn test_resolve_identity() {
    let alice = user("alice@example.com", false);
    let repo = MemoryUserRepository::with_users(vec![alice.clone()]);
    let token = codec().encode(&alice, DAY);

    assert_eq!(resolve_identity(None, &codec(), &repo).await, Identity::Anonymous);
    assert_eq!(
        resolve_identity(Some("garbage"), &codec(), &repo).await,
        Identity::Anonymous
    );

    let identity = resolve_identity(Some(&token), &codec(), &repo).await;
    assert!(identity.is_authenticated());
    assert_eq!(identity.user().unwrap().id, alice.id);
}

#[test]
fn test_require_admin() {
    let anonymous = Identity::Anonymous;
    let member = Identity::User(user("bob@example.com", false).redacted());
    let admin = Identity::User(user("root@example.com", true).redacted());

    assert!(matches!(
        require_admin(&anonymous),
        Err(AuthError::AdminRequired)
    ));
    assert!(matches!(require_admin(&member), Err(AuthError::AdminRequired)));
    assert!(require_admin(&admin).is_ok());

    let err = require_admin(&member).unwrap_err().to_app_error();
    assert_eq!(err.code(), "permission:forbidden");
    assert_eq!(err.status_code(), 403);
}

#[test]
fn test_require_user() {
    assert!(matches!(
        Identity::Anonymous.require_user(),
        Err(AuthError::SignInRequired)
    ));
}

// ============================================================================
// Registration and sign-in
// ============================================================================

fn sign_up_input(email: &str, name: &str, password: &str) -> SignUpInput {
    SignUpInput {
        email: email.to_string(),
        name: name.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_sign_up_validation() {
    let use_case = SignUpUseCase::new(Arc::new(MemoryUserRepository::default()), config());

    let err = use_case
        .execute(sign_up_input("bad@@x", "Bad", DIGEST))
        .await
        .unwrap_err();
    assert_eq!(err.to_app_error().field(), Some("email"));

    let err = use_case
        .execute(sign_up_input("ok@example.com", "Ok", "abc"))
        .await
        .unwrap_err();
    assert_eq!(err.to_app_error().field(), Some("password"));

    let err = use_case
        .execute(sign_up_input("ok@example.com", "   ", DIGEST))
        .await
        .unwrap_err();
    assert_eq!(err.to_app_error().field(), Some("name"));
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = SignUpUseCase::new(repo.clone(), config());

    use_case
        .execute(sign_up_input("a@b.com", "A", DIGEST))
        .await
        .unwrap();
    let err = use_case
        .execute(sign_up_input("a@b.com", "A again", DIGEST))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::EmailInUse));
    let app_err = err.to_app_error();
    assert_eq!(app_err.code(), "register:failed");
    assert!(app_err.message().contains("already in use"));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_sign_up_stores_salted_hash() {
    let repo = Arc::new(MemoryUserRepository::default());
    let output = SignUpUseCase::new(repo.clone(), config())
        .execute(sign_up_input("new@example.com", "  New  ", DIGEST))
        .await
        .unwrap();

    assert!(output.user.is_redacted());
    assert_eq!(output.user.name.as_str(), "New");
    assert_eq!(output.session.ttl, DAY);

    let stored = repo.get(&output.user.id).unwrap();
    assert_eq!(stored.password_hash, hash_password(stored.id.as_str(), DIGEST));
    assert!(!stored.admin);
    assert_eq!(
        stored.image,
        format!(
            "http://www.gravatar.com/avatar/{}?d=mm&s=120",
            md5_hex(b"new@example.com")
        )
    );

    // The issued token authenticates the new account
    assert!(codec().decode(&output.session.value, repo.as_ref()).await.is_some());
}

#[tokio::test]
async fn test_sign_in() {
    let alice = user("alice@example.com", false);
    let repo = Arc::new(MemoryUserRepository::with_users(vec![alice.clone()]));
    let use_case = SignInUseCase::new(repo.clone(), config());

    let input = |email: &str, password: &str| SignInInput {
        email: email.to_string(),
        password: password.to_string(),
    };

    assert!(matches!(
        use_case.execute(input("", DIGEST)).await,
        Err(AuthError::InvalidEmail)
    ));
    assert!(matches!(
        use_case.execute(input("alice@example.com", "")).await,
        Err(AuthError::InvalidPassword)
    ));
    assert!(matches!(
        use_case.execute(input("nobody@example.com", DIGEST)).await,
        Err(AuthError::EmailNotFound)
    ));
    assert!(matches!(
        use_case.execute(input("alice@example.com", OTHER_DIGEST)).await,
        Err(AuthError::WrongPassword)
    ));

    let output = use_case
        .execute(input("alice@example.com", DIGEST))
        .await
        .unwrap();
    assert_eq!(output.user.id, alice.id);
    assert!(output.user.is_redacted());
}

#[tokio::test]
async fn test_list_users_redacted_and_paged() {
    let users: Vec<User> = (0..12)
        .map(|i| user(&format!("user{i}@example.com"), false))
        .collect();
    let repo = Arc::new(MemoryUserRepository::with_users(users));
    let use_case = ListUsersUseCase::new(repo, 10);

    let first = use_case.execute(1).await.unwrap();
    assert_eq!(first.page.page_count, 2);
    assert_eq!(first.users.len(), 10);
    assert!(first.users.iter().all(User::is_redacted));

    let second = use_case.execute(2).await.unwrap();
    assert_eq!(second.users.len(), 2);

    let past_end = use_case.execute(9).await.unwrap();
    assert!(past_end.users.is_empty());
}

// ============================================================================
// Router
// ============================================================================

fn app(repo: Arc<MemoryUserRepository>) -> Router {
    let config = config();
    with_identity(
        auth_router_generic(repo.clone(), config.clone()),
        repo,
        config,
    )
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn session_cookie(response: &axum::response::Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_register_then_me() {
    let repo = Arc::new(MemoryUserRepository::default());

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/api/users",
            serde_json::json!({"email": "web@example.com", "name": "Web", "password": DIGEST}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert!(!set_cookie.contains("SameSite"));

    let cookie = session_cookie(&response);
    let body = body_bytes(response).await;
    let registered: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(registered.email, "web@example.com");
    assert!(!String::from_utf8(body).unwrap().contains("password"));

    let response = app(repo)
        .oneshot(
            Request::builder()
                .uri("/api/me")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let me: Option<UserResponse> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(me.map(|u| u.id), Some(registered.id));
}

#[tokio::test]
async fn test_me_anonymous_with_bad_cookie() {
    let response = app(Arc::new(MemoryUserRepository::default()))
        .oneshot(
            Request::builder()
                .uri("/api/me")
                .header(header::COOKIE, "awesession=garbage")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"null");
}

#[tokio::test]
async fn test_authenticate_wrong_password_body() {
    let alice = user("alice@example.com", false);
    let repo = Arc::new(MemoryUserRepository::with_users(vec![alice]));

    let response = app(repo)
        .oneshot(json_request(
            "POST",
            "/api/authenticate",
            serde_json::json!({"email": "alice@example.com", "password": OTHER_DIGEST}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.error, "value:invalid");
    assert_eq!(body.data.as_deref(), Some("password"));
}

#[tokio::test]
async fn test_authenticate_sets_cookie() {
    let alice = user("alice@example.com", false);
    let repo = Arc::new(MemoryUserRepository::with_users(vec![alice.clone()]));

    let response = app(repo)
        .oneshot(json_request(
            "POST",
            "/api/authenticate",
            serde_json::json!({"email": "alice@example.com", "password": DIGEST}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = session_cookie(&response);
    assert!(cookie.starts_with(&format!("awesession={}-", alice.id)));
}

#[tokio::test]
async fn test_register_duplicate_body() {
    let repo = Arc::new(MemoryUserRepository::with_users(vec![user("a@b.com", false)]));

    let response = app(repo)
        .oneshot(json_request(
            "POST",
            "/api/users",
            serde_json::json!({"email": "a@b.com", "name": "A", "password": DIGEST}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.error, "register:failed");
    assert_eq!(body.data.as_deref(), Some("email"));
    assert_eq!(body.message, "Email is already in use.");
}

#[tokio::test]
async fn test_missing_body_fields_are_value_errors() {
    let response = app(Arc::new(MemoryUserRepository::default()))
        .oneshot(json_request("POST", "/api/authenticate", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.data.as_deref(), Some("email"));
}

fn raw_request(uri: &str, content_type: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_authenticate_accepts_form_post() {
    let alice = user("alice@example.com", false);
    let repo = Arc::new(MemoryUserRepository::with_users(vec![alice.clone()]));

    let response = app(repo)
        .oneshot(raw_request(
            "/api/authenticate",
            "application/x-www-form-urlencoded",
            format!("email=alice%40example.com&password={DIGEST}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).starts_with(&format!("awesession={}-", alice.id)));
}

#[tokio::test]
async fn test_malformed_json_gets_error_body() {
    let response = app(Arc::new(MemoryUserRepository::default()))
        .oneshot(raw_request(
            "/api/authenticate",
            "application/json",
            "{not json".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.error, "value:invalid");
    assert_eq!(body.data.as_deref(), Some("body"));
}

#[tokio::test]
async fn test_unsupported_content_type_gets_error_body() {
    let response = app(Arc::new(MemoryUserRepository::default()))
        .oneshot(raw_request(
            "/api/users",
            "text/plain",
            "email=a@b.com".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.error, "value:invalid");
    assert_eq!(body.data.as_deref(), Some("body"));
}

#[tokio::test]
async fn test_sign_out_redirects_to_referer() {
    let repo = Arc::new(MemoryUserRepository::default());

    let response = app(repo.clone())
        .oneshot(
            Request::builder()
                .uri("/signout")
                .header(header::REFERER, "/blog/123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/blog/123");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("awesession=-deleted-"));
    assert!(cookie.contains("Max-Age=0"));

    let response = app(repo)
        .oneshot(Request::builder().uri("/signout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn test_list_users_endpoint_hides_hashes() {
    let alice = user("alice@example.com", false);
    let hash = alice.password_hash.clone();
    let repo = Arc::new(MemoryUserRepository::with_users(vec![alice]));

    let response = app(repo)
        .oneshot(
            Request::builder()
                .uri("/api/users?page=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    assert!(!String::from_utf8_lossy(&body).contains(&hash));

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["page"]["pageIndex"], 1);
    assert_eq!(value["users"].as_array().unwrap().len(), 1);
}

#[test]
fn test_user_list_response_shape() {
    let alice = user("alice@example.com", false).redacted();
    let response = UserListResponse {
        page: kernel::page::Page::new(1, 1, 10),
        users: vec![UserResponse::from(&alice)],
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["users"][0]["email"], "alice@example.com");
    assert!(json["users"][0].get("createdAt").is_some());
}
