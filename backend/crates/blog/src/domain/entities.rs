//! Domain Entities
//!
//! Blogs and comments. Both carry a copy of their author's name and avatar
//! taken when they were written.

use auth::User;
use chrono::{DateTime, Utc};
use kernel::id::{BlogId, CommentId, UserId};

use crate::domain::value_objects::{BlogDraft, CommentText};

/// Author details copied onto blogs and comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub user_id: UserId,
    pub user_name: String,
    pub user_image: String,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            user_name: user.name.to_string(),
            user_image: user.image.clone(),
        }
    }
}

/// Blog entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub author: Author,
    pub name: String,
    pub summary: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog
    pub fn new(author: Author, draft: BlogDraft) -> Self {
        Self {
            id: BlogId::new(),
            author,
            name: draft.name,
            summary: draft.summary,
            content: draft.content,
            created_at: Utc::now(),
        }
    }

    /// Replace the text, keeping id, author and creation time
    pub fn revise(&mut self, draft: BlogDraft) {
        self.name = draft.name;
        self.summary = draft.summary;
        self.content = draft.content;
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub blog_id: BlogId,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on `blog`
    pub fn new(blog: &Blog, author: Author, content: CommentText) -> Self {
        Self {
            id: CommentId::new(),
            blog_id: blog.id.clone(),
            author,
            content: content.into_inner(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            user_id: UserId::from_db("u1"),
            user_name: "Alice".to_string(),
            user_image: "http://img".to_string(),
        }
    }

    #[test]
    fn test_revise_keeps_identity() {
        let mut blog = Blog::new(author(), BlogDraft::new("a", "b", "c").unwrap());
        let id = blog.id.clone();
        let created_at = blog.created_at;

        blog.revise(BlogDraft::new("x", "y", "z").unwrap());

        assert_eq!(blog.id, id);
        assert_eq!(blog.created_at, created_at);
        assert_eq!(blog.name, "x");
        assert_eq!(blog.author, author());
    }

    #[test]
    fn test_comment_links_blog() {
        let blog = Blog::new(author(), BlogDraft::new("a", "b", "c").unwrap());
        let comment = Comment::new(&blog, author(), CommentText::new(" nice ").unwrap());
        assert_eq!(comment.blog_id, blog.id);
        assert_eq!(comment.content, "nice");
    }
}
