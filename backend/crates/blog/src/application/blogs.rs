//! Blog Use Cases

use std::sync::Arc;

use auth::{Identity, require_admin};
use kernel::id::BlogId;
use kernel::page::Page;

use crate::domain::entities::{Author, Blog};
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::BlogDraft;
use crate::error::{BlogError, BlogResult};

/// Submitted blog text, not yet validated
pub struct BlogInput {
    pub name: String,
    pub summary: String,
    pub content: String,
}

impl BlogInput {
    fn validate(&self) -> BlogResult<BlogDraft> {
        BlogDraft::new(&self.name, &self.summary, &self.content)
    }
}

/// An id from a URL; malformed ids cannot name a stored blog
fn parse_blog_id(raw: &str) -> BlogResult<BlogId> {
    BlogId::parse(raw).map_err(|_| BlogError::BlogNotFound)
}

// ============================================================================
// Reading
// ============================================================================

/// One page of blogs
#[derive(Debug)]
pub struct BlogPage {
    pub page: Page,
    pub blogs: Vec<Blog>,
}

pub struct ListBlogsUseCase<B>
where
    B: BlogRepository,
{
    blogs: Arc<B>,
    page_size: u64,
}

impl<B> ListBlogsUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blogs: Arc<B>, page_size: u64) -> Self {
        Self { blogs, page_size }
    }

    pub async fn execute(&self, page_index: u64) -> BlogResult<BlogPage> {
        let total = self.blogs.count().await?;
        let page = Page::new(total, page_index, self.page_size);

        let blogs = if page.is_empty() {
            Vec::new()
        } else {
            self.blogs.list(page.offset, page.limit).await?
        };

        Ok(BlogPage { page, blogs })
    }
}

pub struct GetBlogUseCase<B>
where
    B: BlogRepository,
{
    blogs: Arc<B>,
}

impl<B> GetBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blogs: Arc<B>) -> Self {
        Self { blogs }
    }

    pub async fn execute(&self, blog_id: &str) -> BlogResult<Blog> {
        let blog_id = parse_blog_id(blog_id)?;
        self.blogs
            .find_by_id(&blog_id)
            .await?
            .ok_or(BlogError::BlogNotFound)
    }
}

// ============================================================================
// Writing (admin only)
// ============================================================================

pub struct CreateBlogUseCase<B>
where
    B: BlogRepository,
{
    blogs: Arc<B>,
}

impl<B> CreateBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blogs: Arc<B>) -> Self {
        Self { blogs }
    }

    pub async fn execute(&self, identity: &Identity, input: BlogInput) -> BlogResult<Blog> {
        let admin = require_admin(identity)?;
        let draft = input.validate()?;

        let blog = Blog::new(Author::from(admin), draft);
        self.blogs.create(&blog).await?;

        tracing::info!(blog_id = %blog.id, user_id = %admin.id, "Blog created");

        Ok(blog)
    }
}

pub struct UpdateBlogUseCase<B>
where
    B: BlogRepository,
{
    blogs: Arc<B>,
}

impl<B> UpdateBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blogs: Arc<B>) -> Self {
        Self { blogs }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        blog_id: &str,
        input: BlogInput,
    ) -> BlogResult<Blog> {
        let admin = require_admin(identity)?;

        let blog_id = parse_blog_id(blog_id)?;
        let mut blog = self
            .blogs
            .find_by_id(&blog_id)
            .await?
            .ok_or(BlogError::BlogNotFound)?;

        blog.revise(input.validate()?);
        self.blogs.update(&blog).await?;

        tracing::info!(blog_id = %blog.id, user_id = %admin.id, "Blog updated");

        Ok(blog)
    }
}

pub struct DeleteBlogUseCase<B>
where
    B: BlogRepository,
{
    blogs: Arc<B>,
}

impl<B> DeleteBlogUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blogs: Arc<B>) -> Self {
        Self { blogs }
    }

    pub async fn execute(&self, identity: &Identity, blog_id: &str) -> BlogResult<BlogId> {
        let admin = require_admin(identity)?;

        let blog_id = parse_blog_id(blog_id)?;
        if self.blogs.find_by_id(&blog_id).await?.is_none() {
            return Err(BlogError::BlogNotFound);
        }
        self.blogs.delete(&blog_id).await?;

        tracing::info!(blog_id = %blog_id, user_id = %admin.id, "Blog deleted");

        Ok(blog_id)
    }
}
