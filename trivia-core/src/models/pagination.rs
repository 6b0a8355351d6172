//! Fixed-size page slicing over already-loaded rows

use serde::{Deserialize, Serialize};

/// Questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Page of [`QUESTIONS_PER_PAGE`] items. Pages below 1 clamp to 1.
    pub fn new(page: i64) -> Self {
        Self::with_per_page(page, QUESTIONS_PER_PAGE)
    }

    pub fn with_per_page(page: i64, per_page: usize) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        Self {
            page,
            per_page: per_page.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Cut this page out of `items`, keeping the total count.
    ///
    /// A page past the end yields an empty item list.
    pub fn paginate<T>(&self, items: Vec<T>) -> Paginated<T> {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(self.offset())
            .take(self.per_page)
            .collect();

        Paginated {
            items,
            total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of items plus the size of the list it was cut from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl<T> Paginated<T> {
    /// Number of non-empty pages the full list spans.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }
}

/// Query parameters for pagination (`?page=2`)
///
/// `page` is kept as text; anything that is not an integer means page 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}
