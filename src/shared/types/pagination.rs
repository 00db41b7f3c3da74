//! List pagination state
//!
//! Every list page owns one [`PaginationState`]. It is mutated only through
//! its actions, which clamp their input instead of failing, so the current
//! page always stays within `1..=total_pages()`.

use serde::{Deserialize, Serialize};

/// Message returned by [`PaginationState::summary`] for an empty list.
pub const EMPTY_SUMMARY: &str = "No data";

/// Pagination state of a single list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_items: u64,
    initial_page: u32,
    default_page_size: u32,
}

impl PaginationState {
    /// Create a state for a freshly mounted list.
    ///
    /// `page_size` doubles as the default restored by [`reset`](Self::reset);
    /// use [`with_default_page_size`](Self::with_default_page_size) when the
    /// configured default differs from the initial size.
    pub fn new(initial_page: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let initial_page = initial_page.max(1);
        let mut state = Self {
            current_page: initial_page,
            page_size,
            total_items: 0,
            initial_page,
            default_page_size: page_size,
        };
        state.clamp_current_page();
        state
    }

    pub fn with_default_page_size(mut self, default_page_size: u32) -> Self {
        self.default_page_size = default_page_size.max(1);
        self
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.page_size)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Jump to `page`, clamped into `1..=total_pages()`.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Change the page size, then pull the current page back into range.
    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.max(1);
        self.clamp_current_page();
    }

    /// Record a new total (server-reported or local collection length).
    pub fn set_total_items(&mut self, total: u64) {
        self.total_items = total;
        self.clamp_current_page();
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Restore the initial page and the configured default page size and
    /// forget the total.
    pub fn reset(&mut self) {
        self.page_size = self.default_page_size;
        self.total_items = 0;
        self.current_page = self.initial_page;
        self.clamp_current_page();
    }

    /// Query parameters for a server-paginated fetch of the current page.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// Zero-based `start..end` item offsets of the current page, unbounded
    /// by the actual collection length.
    pub fn offsets(&self) -> (u64, u64) {
        let start = u64::from(self.current_page - 1) * u64::from(self.page_size);
        (start, start + u64::from(self.page_size))
    }

    /// One-based inclusive range of visible items, `None` when empty.
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        if self.total_items == 0 {
            return None;
        }
        let (start, end) = self.offsets();
        Some((start + 1, end.min(self.total_items)))
    }

    /// Human readable "showing X-Y of Z" line.
    pub fn summary(&self) -> String {
        match self.visible_range() {
            Some((start, end)) => {
                format!("Showing {start}-{end} of {}", self.total_items)
            }
            None => EMPTY_SUMMARY.to_string(),
        }
    }

    fn clamp_current_page(&mut self) {
        let total_pages = self.total_pages();
        if self.current_page > total_pages {
            self.current_page = total_pages.max(1);
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Compute `max(1, ceil(total_items / page_size))`, saturating at `u32::MAX`.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(u64::from(page_size.max(1))).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Visible window of a fully loaded collection for the current page.
///
/// Returns an empty slice when the page starts past the end of `data`.
pub fn slice<'a, T>(data: &'a [T], state: &PaginationState) -> &'a [T] {
    let (start, end) = state.offsets();
    let len = data.len() as u64;
    if start >= len {
        return &[];
    }
    // Both bounds are <= len, which came from a usize.
    &data[start as usize..end.min(len) as usize]
}

/// `page`/`page_size` query parameters of a server-paginated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Query parameters for a server-paginated GET.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated collection as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on the requested page
    pub list: Vec<T>,
    /// Item count across all pages
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn new(list: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            list,
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }
}
