//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, CommentId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{Author, Blog, Comment};
use crate::domain::repository::{BlogRepository, CommentRepository};
use crate::error::BlogResult;

/// PostgreSQL-backed blog and comment repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Clamp a paging value into a SQL BIGINT
fn to_sql_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_sql_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

// ============================================================================
// Blog Repository Implementation
// ============================================================================

impl BlogRepository for PgBlogRepository {
    async fn create(&self, blog: &Blog) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (
                id,
                user_id,
                user_name,
                user_image,
                name,
                summary,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(blog.id.as_str())
        .bind(blog.author.user_id.as_str())
        .bind(&blog.author.user_name)
        .bind(&blog.author.user_image)
        .bind(&blog.name)
        .bind(&blog.summary)
        .bind(&blog.content)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> BlogResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, user_id, user_name, user_image, name, summary, content, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(blog_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }

    async fn update(&self, blog: &Blog) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE blogs SET
                name = $2,
                summary = $3,
                content = $4
            WHERE id = $1
            "#,
        )
        .bind(blog.id.as_str())
        .bind(&blog.name)
        .bind(&blog.summary)
        .bind(&blog.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, blog_id: &BlogId) -> BlogResult<()> {
        // comments.blog_id cascades
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(blog_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> BlogResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await?;

        Ok(from_sql_count(count))
    }

    async fn list(&self, offset: u64, limit: u64) -> BlogResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, user_id, user_name, user_image, name, summary, content, created_at
            FROM blogs
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(to_sql_i64(limit))
        .bind(to_sql_i64(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogRow::into_blog).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                id,
                blog_id,
                user_id,
                user_name,
                user_image,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.as_str())
        .bind(comment.blog_id.as_str())
        .bind(comment.author.user_id.as_str())
        .bind(&comment.author.user_name)
        .bind(&comment.author.user_image)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> BlogResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, blog_id, user_id, user_name, user_image, content, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn delete(&self, comment_id: &CommentId) -> BlogResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> BlogResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await?;

        Ok(from_sql_count(count))
    }

    async fn list(&self, offset: u64, limit: u64) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, blog_id, user_id, user_name, user_image, content, created_at
            FROM comments
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(to_sql_i64(limit))
        .bind(to_sql_i64(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn list_by_blog(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, blog_id, user_id, user_name, user_image, content, created_at
            FROM comments
            WHERE blog_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(blog_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: String,
    user_id: String,
    user_name: String,
    user_image: String,
    name: String,
    summary: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl BlogRow {
    fn into_blog(self) -> Blog {
        Blog {
            id: BlogId::from_db(self.id),
            author: Author {
                user_id: UserId::from_db(self.user_id),
                user_name: self.user_name,
                user_image: self.user_image,
            },
            name: self.name,
            summary: self.summary,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    blog_id: String,
    user_id: String,
    user_name: String,
    user_image: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::from_db(self.id),
            blog_id: BlogId::from_db(self.blog_id),
            author: Author {
                user_id: UserId::from_db(self.user_id),
                user_name: self.user_name,
                user_image: self.user_image,
            },
            content: self.content,
            created_at: self.created_at,
        }
    }
}
