//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::page::Page;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Blog, Comment};

// ============================================================================
// Requests
// ============================================================================

/// Blog create/update request
///
/// Missing members deserialize as empty and fail as blank fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogRequest {
    pub name: String,
    pub summary: String,
    pub content: String,
}

/// Comment create request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentRequest {
    pub content: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub name: String,
    pub summary: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            user_id: blog.author.user_id.to_string(),
            user_name: blog.author.user_name.clone(),
            user_image: blog.author.user_image.clone(),
            name: blog.name.clone(),
            summary: blog.summary.clone(),
            content: blog.content.clone(),
            created_at: blog.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            blog_id: comment.blog_id.to_string(),
            user_id: comment.author.user_id.to_string(),
            user_name: comment.author.user_name.clone(),
            user_image: comment.author.user_image.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Paged blog listing
#[derive(Debug, Clone, Serialize)]
pub struct BlogListResponse {
    pub page: Page,
    pub blogs: Vec<BlogResponse>,
}

/// Paged comment listing
#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub page: Page,
    pub comments: Vec<CommentResponse>,
}

/// Id of a deleted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub id: String,
}
