//! # Pagination
//!
//! Listings are paginated client-side: the whole catalog is fetched once and
//! pages are windows over that in-memory, already sorted collection. Changing
//! the page or the page size never touches the store.
//!
//! Pages are 1-indexed. Page `k` with page size `P` is the slice
//! `items[(k-1)*P .. k*P]`, clipped to the collection. The last page may be
//! shorter than `P`, and any page past the last one is empty.

use crate::error::{CatalogError, Result};
use serde::Serialize;

pub const DEFAULT_PER_PAGE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Result<Self> {
        if page == 0 {
            return Err(CatalogError::InvalidPage(page));
        }
        if per_page == 0 {
            return Err(CatalogError::InvalidPageSize(per_page.to_string()));
        }
        Ok(Self { page, per_page })
    }

    /// Builds a pagination from a typed page size, e.g. `"50"`.
    pub fn parse(page: usize, per_page: &str) -> Result<Self> {
        let size = per_page
            .trim()
            .parse::<usize>()
            .map_err(|_| CatalogError::InvalidPageSize(per_page.to_string()))?;
        Self::new(page, size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.per_page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    pub fn info(&self, total_results: usize) -> PageInfo {
        PageInfo {
            page: self.page,
            per_page: self.per_page,
            total_results,
            total_pages: total_results.div_ceil(self.per_page),
        }
    }
}

/// Where a page sits within the full listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total_results: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// 1-indexed position of the first item on this page, or 0 when empty.
    pub fn first_item(&self) -> usize {
        let start = (self.page - 1).saturating_mul(self.per_page);
        if start >= self.total_results {
            0
        } else {
            start + 1
        }
    }

    pub fn last_item(&self) -> usize {
        self.page
            .saturating_mul(self.per_page)
            .min(self.total_results)
    }

    pub fn is_past_end(&self) -> bool {
        self.first_item() == 0
    }
}
