//! Domain Value Objects
//!
//! Validated text submitted for blogs and comments.

use crate::error::{BlogError, BlogResult};

/// Width of the `blogs.name` column
pub const BLOG_NAME_MAX_LENGTH: usize = 50;

/// Width of the `blogs.summary` column
pub const BLOG_SUMMARY_MAX_LENGTH: usize = 200;

/// Trim `raw`, refusing blank input for `field`
fn required(field: &'static str, raw: &str) -> BlogResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BlogError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// [`required`], also bounded to `max` characters
fn bounded(field: &'static str, raw: &str, max: usize) -> BlogResult<String> {
    let value = required(field, raw)?;
    if value.chars().count() > max {
        return Err(BlogError::FieldTooLong { field, max });
    }
    Ok(value)
}

/// Title, summary and body of a blog, all trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub name: String,
    pub summary: String,
    pub content: String,
}

impl BlogDraft {
    /// Validate in field order: name, summary, content
    pub fn new(name: &str, summary: &str, content: &str) -> BlogResult<Self> {
        Ok(Self {
            name: bounded("name", name, BLOG_NAME_MAX_LENGTH)?,
            summary: bounded("summary", summary, BLOG_SUMMARY_MAX_LENGTH)?,
            content: required("content", content)?,
        })
    }
}

/// Comment body, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(raw: &str) -> BlogResult<Self> {
        required("content", raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims() {
        let draft = BlogDraft::new(" Title ", "\tsum\n", " body ").unwrap();
        assert_eq!(draft.name, "Title");
        assert_eq!(draft.summary, "sum");
        assert_eq!(draft.content, "body");
    }

    #[test]
    fn test_draft_reports_first_blank_field() {
        assert!(matches!(
            BlogDraft::new(" ", "", ""),
            Err(BlogError::EmptyField("name"))
        ));
        assert!(matches!(
            BlogDraft::new("t", "  ", ""),
            Err(BlogError::EmptyField("summary"))
        ));
        assert!(matches!(
            BlogDraft::new("t", "s", "\n"),
            Err(BlogError::EmptyField("content"))
        ));
    }

    #[test]
    fn test_draft_length_limits() {
        let name = "n".repeat(BLOG_NAME_MAX_LENGTH);
        let summary = "s".repeat(BLOG_SUMMARY_MAX_LENGTH);
        assert!(BlogDraft::new(&name, &summary, "c").is_ok());

        // Limits count characters, not bytes
        assert!(BlogDraft::new(&"é".repeat(BLOG_NAME_MAX_LENGTH), "s", "c").is_ok());

        assert!(matches!(
            BlogDraft::new(&format!("{name}n"), "s", "c"),
            Err(BlogError::FieldTooLong { field: "name", max: 50 })
        ));
        assert!(matches!(
            BlogDraft::new("t", &format!("{summary}s"), "c"),
            Err(BlogError::FieldTooLong { field: "summary", max: 200 })
        ));
        // Surrounding whitespace does not count
        assert!(BlogDraft::new(&format!("  {name}  "), "s", "c").is_ok());
    }

    #[test]
    fn test_comment_text() {
        assert_eq!(CommentText::new("  hi  ").unwrap().as_str(), "hi");
        assert!(matches!(
            CommentText::new("   "),
            Err(BlogError::EmptyField("content"))
        ));
    }
}
