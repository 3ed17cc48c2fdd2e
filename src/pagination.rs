//! Client-side paging for the news list.
//!
//! Pages are 1-based. Out-of-range requests clamp to the nearest real page,
//! and the pager only ever links to pages that exist.

/// One page of items plus what the pager needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> PageSlice<T> {
    #[must_use]
    pub fn info(&self) -> PageInfo {
        PageInfo { page: self.page, total_pages: self.total_pages }
    }
}

/// Position within the page range, detached from the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
}

impl PageInfo {
    #[must_use]
    pub fn has_prev(self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(self) -> bool {
        self.page < self.total_pages
    }

    /// Page numbers the pager links to, `1..=total_pages`.
    #[must_use]
    pub fn page_numbers(self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Number of pages for `total` items, at least one so an empty list still
/// renders a (blank) first page.
#[must_use]
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` to the requested page, clamping `page` into range.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = page.clamp(1, total_pages);
    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();
    PageSlice { items, page, total_pages, total_items }
}

/// Parse a `?page=` value; anything unusable means page 1.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
