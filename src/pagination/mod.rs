//! Pagination over the filtered view.
//!
//! Everything here is a pure function of the view length and the
//! [`PaginationState`]. The current page is clamped into range before any
//! slicing, so a stale page number can never produce an empty or
//! out-of-bounds page while the view has records.

mod buttons;

pub use buttons::{page_buttons, PageButton, DEFAULT_WINDOW};

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [PageSize; 5] = [
    PageSize::Fixed(10),
    PageSize::Fixed(20),
    PageSize::Fixed(50),
    PageSize::Fixed(100),
    PageSize::All,
];

/// Items per page: a fixed count (at least 1) or everything on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Fixed(usize),
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Fixed(20)
    }
}

impl PageSize {
    /// Build a fixed size, rejecting zero.
    pub fn fixed(n: usize) -> Option<Self> {
        (n >= 1).then_some(PageSize::Fixed(n))
    }

    /// Effective items per page for a view of `len` records.
    pub fn per_page(&self, len: usize) -> usize {
        match self {
            PageSize::Fixed(n) => (*n).max(1),
            PageSize::All => len.max(1),
        }
    }

    /// Next offered size, wrapping around. A custom size jumps to the first option.
    pub fn cycle_next(self) -> Self {
        let idx = PAGE_SIZE_OPTIONS.iter().position(|s| *s == self);
        match idx {
            Some(i) => PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()],
            None => PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Fixed(n) => write!(f, "{n}"),
            PageSize::All => f.write_str("all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        s.parse::<usize>()
            .ok()
            .and_then(PageSize::fixed)
            .ok_or_else(|| format!("invalid page size '{s}': expected a number >= 1 or 'all'"))
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageSize::Fixed(n) => serializer.serialize_u64(*n as u64),
            PageSize::All => serializer.serialize_str("all"),
        }
    }
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: PageSize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

/// `max(1, ceil(len / per_page))`.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.per_page(len)).max(1)
}

/// 1-based inclusive range of the visible records, for display.
///
/// `start` is 0 only when `total` is 0, and `start <= end <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeLabel {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{} / {}", self.start, self.end, self.total)
    }
}

/// Where the current page sits inside the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    /// Offset of the first visible record in the view.
    pub offset: usize,
    /// One past the last visible record.
    pub end: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn compute(len: usize, state: &PaginationState) -> Self {
        let total_pages = total_pages(len, state.page_size);
        let current_page = state.current_page.clamp(1, total_pages);
        let per_page = state.page_size.per_page(len);
        let offset = ((current_page - 1) * per_page).min(len);
        let end = (offset + per_page).min(len);
        Self {
            current_page,
            total_pages,
            offset,
            end,
            total: len,
        }
    }

    pub fn slice<'a, T>(&self, view: &'a [T]) -> &'a [T] {
        &view[self.offset.min(view.len())..self.end.min(view.len())]
    }

    pub fn range_label(&self) -> RangeLabel {
        RangeLabel {
            start: if self.total == 0 { 0 } else { self.offset + 1 },
            end: self.end,
            total: self.total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn buttons(&self) -> Vec<PageButton> {
        page_buttons(self.current_page, self.total_pages, DEFAULT_WINDOW)
    }
}

/// One page of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub window: PageWindow,
}

/// Slice `view` according to `state`, clamping the current page into range.
pub fn paginate<'a, T>(view: &'a [T], state: &PaginationState) -> Page<'a, T> {
    let window = PageWindow::compute(view.len(), state);
    Page {
        items: window.slice(view),
        window,
    }
}
