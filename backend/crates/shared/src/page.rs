//! Paging
//!
//! Offset/limit arithmetic for the listing endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One page of a listing
///
/// ## Examples
/// ```rust
/// use kernel::page::Page;
///
/// let page = Page::new(91, 3, 10);
/// assert_eq!(page.page_count, 10);
/// assert_eq!(page.offset, 20);
/// assert_eq!(page.limit, 10);
/// assert!(page.has_next && page.has_previous);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub item_count: u64,
    pub page_index: u64,
    pub page_size: u64,
    pub page_count: u64,
    pub offset: u64,
    pub limit: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Page {
    /// Compute the page for `page_index` (1-based)
    ///
    /// An index past the last page, or an empty listing, yields an empty
    /// window (`offset == 0`, `limit == 0`).
    pub fn new(item_count: u64, page_index: u64, page_size: u64) -> Self {
        let page_size = page_size.max(1);
        let page_count = item_count.div_ceil(page_size);

        let (page_index, offset, limit) = if item_count == 0 || page_index > page_count {
            (1, 0, 0)
        } else {
            let index = page_index.max(1);
            (index, page_size * (index - 1), page_size)
        };

        Self {
            item_count,
            page_index,
            page_size,
            page_count,
            offset,
            limit,
            has_next: page_index < page_count,
            has_previous: page_index > 1,
        }
    }

    /// Whether the window selects no rows
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

/// `?page=` query string of a listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested 1-based page index
    pub fn index(&self) -> u64 {
        self.page.as_deref().map(parse_page_index).unwrap_or(1)
    }
}

/// Parse a `?page=` query value; anything unusable means page 1
pub fn parse_page_index(raw: &str) -> u64 {
    raw.trim().parse::<u64>().ok().filter(|p| *p >= 1).unwrap_or(1)
}
