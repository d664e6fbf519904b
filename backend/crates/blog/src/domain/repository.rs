//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Listings are newest first.

use kernel::id::{BlogId, CommentId};

use crate::domain::entities::{Blog, Comment};
use crate::error::BlogResult;

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Create a new blog
    async fn create(&self, blog: &Blog) -> BlogResult<()>;

    /// Find blog by ID
    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>>;

    /// Update name, summary and content
    async fn update(&self, blog: &Blog) -> BlogResult<()>;

    /// Delete a blog and its comments
    async fn delete(&self, blog_id: &BlogId) -> BlogResult<()>;

    /// Number of blogs
    async fn count(&self) -> BlogResult<u64>;

    /// One window of blogs
    async fn list(&self, offset: u64, limit: u64) -> BlogResult<Vec<Blog>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> BlogResult<()>;

    /// Find comment by ID
    async fn find_by_id(&self, comment_id: &CommentId) -> BlogResult<Option<Comment>>;

    /// Delete a comment
    async fn delete(&self, comment_id: &CommentId) -> BlogResult<()>;

    /// Number of comments across all blogs
    async fn count(&self) -> BlogResult<u64>;

    /// One window of comments across all blogs
    async fn list(&self, offset: u64, limit: u64) -> BlogResult<Vec<Comment>>;

    /// All comments of one blog
    async fn list_by_blog(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>>;
}
