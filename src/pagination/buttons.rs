use serde::Serialize;

/// Number of contiguous page numbers shown around the current page.
pub const DEFAULT_WINDOW: usize = 7;

/// An entry in the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageButton {
    pub fn page_number(&self) -> Option<usize> {
        match self {
            PageButton::Page { number, .. } => Some(*number),
            PageButton::Ellipsis => None,
        }
    }
}

/// Enumerate the page-number bar for `current` of `total` pages.
///
/// A contiguous window of up to `width` pages is centred on `current` and
/// shifted to stay inside `[1, total]`. The first and last pages are added
/// outside the window when it does not reach them, with an ellipsis wherever
/// at least one page is skipped. With one page or fewer the result is `[1]`.
pub fn page_buttons(current: usize, total: usize, width: usize) -> Vec<PageButton> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let width = width.max(1);
    let page = |number: usize| PageButton::Page {
        number,
        current: number == current,
    };

    if total == 1 {
        return vec![page(1)];
    }

    let mut start = current.saturating_sub(width / 2).max(1);
    let end = (start + width - 1).min(total);
    if end - start < width - 1 {
        start = (end + 1).saturating_sub(width).max(1);
    }

    let mut buttons = Vec::with_capacity(width + 4);
    if start > 1 {
        buttons.push(page(1));
        if start > 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons.extend((start..=end).map(page));
    if end < total {
        if end < total - 1 {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(page(total));
    }
    buttons
}
