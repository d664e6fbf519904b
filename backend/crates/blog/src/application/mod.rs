//! Application Layer
//!
//! Use cases for blogs and comments.

pub mod blogs;
pub mod comments;
pub mod config;

// Re-exports
pub use blogs::{
    BlogInput, BlogPage, CreateBlogUseCase, DeleteBlogUseCase, GetBlogUseCase, ListBlogsUseCase,
    UpdateBlogUseCase,
};
pub use comments::{
    CommentPage, CreateCommentUseCase, DeleteCommentUseCase, ListBlogCommentsUseCase,
    ListCommentsUseCase,
};
pub use config::BlogConfig;
