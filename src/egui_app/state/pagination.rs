//! Pagination and Sort Control
//!
//! Tracks the current page, page size, and sort field/order for the todo
//! list. Any change here invalidates the loaded row set: the caller is
//! expected to refetch, replacing the rows wholesale.

use crate::shared::todo::SortOrder;

/// Allowed page sizes, mirroring the options offered in the UI
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Page size used on startup
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Most page buttons shown before the window collapses with ellipses
const MAX_VISIBLE_PAGES: u32 = 5;

/// One entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Pagination and sorting state for the todo list.
#[derive(Debug, Clone)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total_count: u64,
    sort_field: Option<String>,
    sort_order: SortOrder,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            sort_field: None,
            sort_order: SortOrder::Asc,
        }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page, 1-based
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Server-reported total record count
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Record the total count reported by the most recent list response
    pub fn set_total_count(&mut self, total: u64) {
        self.total_count = total;
    }

    /// Number of pages at the current page size, at least 1 once any
    /// records exist
    pub fn total_pages(&self) -> u32 {
        (self.total_count as f64 / self.page_size as f64).ceil() as u32
    }

    /// Move to a page, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: u32) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    /// Change the page size and reset to page 1.
    ///
    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are rejected.
    pub fn set_page_size(&mut self, page_size: u32) {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            tracing::warn!("rejected page size {}", page_size);
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }

    /// Toggle sorting on a field.
    ///
    /// Sorting on the current field flips the order; sorting on a new field
    /// starts ascending. Either way the view returns to page 1.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    /// Page numbers to render, windowed around the current page.
    ///
    /// With five or fewer pages, all of them. Otherwise the first and last
    /// page always show; the window `[max(2, page-1), min(last-1, page+1)]`
    /// shows around the current page, with ellipses marking the gaps.
    pub fn page_numbers(&self) -> Vec<PageItem> {
        let total_pages = self.total_pages();
        let mut items = Vec::new();

        if total_pages <= MAX_VISIBLE_PAGES {
            for p in 1..=total_pages {
                items.push(PageItem::Page(p));
            }
            return items;
        }

        items.push(PageItem::Page(1));

        if self.page > 3 {
            items.push(PageItem::Ellipsis);
        }

        let start = self.page.saturating_sub(1).max(2);
        let end = (self.page + 1).min(total_pages - 1);
        for p in start..=end {
            items.push(PageItem::Page(p));
        }

        if self.page < total_pages - 2 {
            items.push(PageItem::Ellipsis);
        }

        items.push(PageItem::Page(total_pages));
        items
    }
}
