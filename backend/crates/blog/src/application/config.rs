//! Application Configuration

use kernel::page::DEFAULT_PAGE_SIZE;

/// Blog application configuration
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Items per page for blog and comment listings
    pub page_size: u64,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
