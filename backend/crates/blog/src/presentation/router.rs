//! Blog Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::middleware::require_admin_page;

use crate::application::config::BlogConfig;
use crate::domain::repository::{BlogRepository, CommentRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repository
pub fn blog_router(repo: Arc<PgBlogRepository>, config: Arc<BlogConfig>) -> Router {
    blog_router_generic(repo, config)
}

/// Create a generic Blog router for any repository implementation
pub fn blog_router_generic<R>(repo: Arc<R>, config: Arc<BlogConfig>) -> Router
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let state = BlogAppState { repo, config };

    Router::new()
        .route(
            "/api/blogs",
            get(handlers::list_blogs::<R>).post(handlers::create_blog::<R>),
        )
        .route(
            "/api/blogs/{id}",
            get(handlers::get_blog::<R>).post(handlers::update_blog::<R>),
        )
        .route("/api/blogs/{id}/delete", post(handlers::delete_blog::<R>))
        .route(
            "/api/blogs/{id}/comments",
            get(handlers::list_blog_comments::<R>).post(handlers::create_comment::<R>),
        )
        .route("/api/comments", get(handlers::list_comments::<R>))
        .route(
            "/api/comments/{id}/delete",
            post(handlers::delete_comment::<R>),
        )
        .with_state(state)
}

/// Browser management routes; non-admins are sent to the sign-in page
pub fn manage_router() -> Router {
    Router::new()
        .route("/manage/", get(handlers::manage_home))
        .route_layer(middleware::from_fn(require_admin_page))
}
