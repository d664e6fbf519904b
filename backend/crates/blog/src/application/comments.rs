//! Comment Use Cases

use std::sync::Arc;

use auth::{Identity, require_admin};
use kernel::id::{BlogId, CommentId};
use kernel::page::Page;

use crate::domain::entities::{Author, Comment};
use crate::domain::repository::{BlogRepository, CommentRepository};
use crate::domain::value_objects::CommentText;
use crate::error::{BlogError, BlogResult};

/// One page of comments
#[derive(Debug)]
pub struct CommentPage {
    pub page: Page,
    pub comments: Vec<Comment>,
}

pub struct ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    comments: Arc<C>,
    page_size: u64,
}

impl<C> ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comments: Arc<C>, page_size: u64) -> Self {
        Self {
            comments,
            page_size,
        }
    }

    pub async fn execute(&self, page_index: u64) -> BlogResult<CommentPage> {
        let total = self.comments.count().await?;
        let page = Page::new(total, page_index, self.page_size);

        let comments = if page.is_empty() {
            Vec::new()
        } else {
            self.comments.list(page.offset, page.limit).await?
        };

        Ok(CommentPage { page, comments })
    }
}

/// Comments under one blog
pub struct ListBlogCommentsUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    blogs: Arc<B>,
    comments: Arc<C>,
}

impl<B, C> ListBlogCommentsUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    pub fn new(blogs: Arc<B>, comments: Arc<C>) -> Self {
        Self { blogs, comments }
    }

    pub async fn execute(&self, blog_id: &str) -> BlogResult<Vec<Comment>> {
        let blog_id = BlogId::parse(blog_id).map_err(|_| BlogError::BlogNotFound)?;
        if self.blogs.find_by_id(&blog_id).await?.is_none() {
            return Err(BlogError::BlogNotFound);
        }
        self.comments.list_by_blog(&blog_id).await
    }
}

/// Any signed-in user may comment
pub struct CreateCommentUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    blogs: Arc<B>,
    comments: Arc<C>,
}

impl<B, C> CreateCommentUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    pub fn new(blogs: Arc<B>, comments: Arc<C>) -> Self {
        Self { blogs, comments }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        blog_id: &str,
        content: &str,
    ) -> BlogResult<Comment> {
        let user = identity.require_user()?;
        let content = CommentText::new(content)?;

        let blog_id = BlogId::parse(blog_id).map_err(|_| BlogError::BlogNotFound)?;
        let blog = self
            .blogs
            .find_by_id(&blog_id)
            .await?
            .ok_or(BlogError::BlogNotFound)?;

        let comment = Comment::new(&blog, Author::from(user), content);
        self.comments.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.id,
            blog_id = %blog.id,
            user_id = %user.id,
            "Comment created"
        );

        Ok(comment)
    }
}

pub struct DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    comments: Arc<C>,
}

impl<C> DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comments: Arc<C>) -> Self {
        Self { comments }
    }

    pub async fn execute(&self, identity: &Identity, comment_id: &str) -> BlogResult<CommentId> {
        let admin = require_admin(identity)?;

        let comment_id =
            CommentId::parse(comment_id).map_err(|_| BlogError::CommentNotFound)?;
        if self.comments.find_by_id(&comment_id).await?.is_none() {
            return Err(BlogError::CommentNotFound);
        }
        self.comments.delete(&comment_id).await?;

        tracing::info!(comment_id = %comment_id, user_id = %admin.id, "Comment deleted");

        Ok(comment_id)
    }
}
