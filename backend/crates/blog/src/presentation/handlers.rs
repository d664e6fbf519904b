//! HTTP Handlers

use std::sync::Arc;

use auth::Identity;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::extract::RequestBody;
use kernel::page::PageQuery;

use crate::application::config::BlogConfig;
use crate::application::{
    BlogInput, CreateBlogUseCase, CreateCommentUseCase, DeleteBlogUseCase, DeleteCommentUseCase,
    GetBlogUseCase, ListBlogCommentsUseCase, ListBlogsUseCase, ListCommentsUseCase,
    UpdateBlogUseCase,
};
use crate::domain::repository::{BlogRepository, CommentRepository};
use crate::error::BlogResult;
use crate::presentation::dto::{
    BlogListResponse, BlogRequest, BlogResponse, CommentListResponse, CommentRequest,
    CommentResponse, DeletedResponse,
};

/// Landing page of the management area
pub const MANAGE_HOME: &str = "/manage/comments";

/// Shared state for blog handlers
pub struct BlogAppState<R>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BlogConfig>,
}

impl<R> Clone for BlogAppState<R>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl From<BlogRequest> for BlogInput {
    fn from(req: BlogRequest) -> Self {
        Self {
            name: req.name,
            summary: req.summary,
            content: req.content,
        }
    }
}

// ============================================================================
// Blogs
// ============================================================================

/// GET /api/blogs?page=N
pub async fn list_blogs<R>(
    State(state): State<BlogAppState<R>>,
    Query(query): Query<PageQuery>,
) -> BlogResult<Json<BlogListResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let output = ListBlogsUseCase::new(state.repo.clone(), state.config.page_size)
        .execute(query.index())
        .await?;

    Ok(Json(BlogListResponse {
        page: output.page,
        blogs: output.blogs.iter().map(BlogResponse::from).collect(),
    }))
}

/// GET /api/blogs/{id}
pub async fn get_blog<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<String>,
) -> BlogResult<Json<BlogResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let blog = GetBlogUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(BlogResponse::from(&blog)))
}

/// POST /api/blogs
pub async fn create_blog<R>(
    State(state): State<BlogAppState<R>>,
    identity: Identity,
    RequestBody(req): RequestBody<BlogRequest>,
) -> BlogResult<Json<BlogResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let blog = CreateBlogUseCase::new(state.repo.clone())
        .execute(&identity, req.into())
        .await?;
    Ok(Json(BlogResponse::from(&blog)))
}

/// POST /api/blogs/{id}
pub async fn update_blog<R>(
    State(state): State<BlogAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
    RequestBody(req): RequestBody<BlogRequest>,
) -> BlogResult<Json<BlogResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let blog = UpdateBlogUseCase::new(state.repo.clone())
        .execute(&identity, &id, req.into())
        .await?;
    Ok(Json(BlogResponse::from(&blog)))
}

/// POST /api/blogs/{id}/delete
pub async fn delete_blog<R>(
    State(state): State<BlogAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
) -> BlogResult<Json<DeletedResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let id = DeleteBlogUseCase::new(state.repo.clone())
        .execute(&identity, &id)
        .await?;
    Ok(Json(DeletedResponse {
        id: id.into_string(),
    }))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/blogs/{id}/comments
pub async fn list_blog_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<String>,
) -> BlogResult<Json<Vec<CommentResponse>>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let comments = ListBlogCommentsUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(&id)
        .await?;
    Ok(Json(comments.iter().map(CommentResponse::from).collect()))
}

/// POST /api/blogs/{id}/comments
pub async fn create_comment<R>(
    State(state): State<BlogAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
    RequestBody(req): RequestBody<CommentRequest>,
) -> BlogResult<Json<CommentResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let comment = CreateCommentUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(&identity, &id, &req.content)
        .await?;
    Ok(Json(CommentResponse::from(&comment)))
}

/// GET /api/comments?page=N
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Query(query): Query<PageQuery>,
) -> BlogResult<Json<CommentListResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let output = ListCommentsUseCase::new(state.repo.clone(), state.config.page_size)
        .execute(query.index())
        .await?;

    Ok(Json(CommentListResponse {
        page: output.page,
        comments: output.comments.iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /api/comments/{id}/delete
pub async fn delete_comment<R>(
    State(state): State<BlogAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
) -> BlogResult<Json<DeletedResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let id = DeleteCommentUseCase::new(state.repo.clone())
        .execute(&identity, &id)
        .await?;
    Ok(Json(DeletedResponse {
        id: id.into_string(),
    }))
}

// ============================================================================
// Management area
// ============================================================================

/// GET /manage/
pub async fn manage_home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, MANAGE_HOME)])
}
