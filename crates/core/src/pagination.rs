//! Pagination normalization for list operations.
//!
//! Out-of-range inputs are silently clamped, never rejected.

/// First valid page number.
pub const MIN_PAGE: i32 = 1;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: i32 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i32 = 200;

/// Page size applied when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i32 = 50;

/// A normalized page/size pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i32,
    page_size: i32,
}

impl PageParams {
    /// Clamp raw caller input into range.
    pub fn new(page: i32, page_size: i32) -> Self {
        Self {
            page: page.max(MIN_PAGE),
            page_size: page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// Clamp optional caller input, defaulting page to 1 and size to 50.
    pub fn from_optional(page: Option<i32>, page_size: Option<i32>) -> Self {
        Self::new(
            page.unwrap_or(MIN_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Effective 1-based page number.
    pub fn page(self) -> i32 {
        self.page
    }

    /// Effective page size within `[1, 200]`.
    pub fn page_size(self) -> i32 {
        self.page_size
    }

    /// Zero-based row offset for LIMIT/OFFSET-style consumers.
    pub fn offset(self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(MIN_PAGE, DEFAULT_PAGE_SIZE)
    }
}
