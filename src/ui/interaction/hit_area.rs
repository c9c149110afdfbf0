//! Hit area system for mouse interactions.
//!
//! Components register clickable regions while rendering, and the event loop
//! asks the registry which action a click maps to.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::SortField;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    // Pagination bar
    GoToPage(usize),
    PrevPage,
    NextPage,

    /// Table header cell.
    SortColumn(SortField),
    /// Card/table toggle in the toolbar.
    ToggleViewMode,

    /// A card or table row, by position on the current page.
    OpenRecord(usize),

    // Modal buttons
    CopyEmail,
    OpenVideo,
    OpenInBrowser,
    CloseOverlay,

    /// Consumes the click without doing anything (modal backgrounds).
    Noop,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over this area.
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for the hit areas of the last rendered frame.
///
/// Cleared at the start of each render. Areas registered later sit on top of
/// earlier ones, so a modal registered after the page wins any overlap.
/// The pointer position survives a clear so hover highlights carry over
/// into the next frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|idx| self.areas[idx].action)
    }

    /// Track the pointer. Returns true when the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.pointer = Some((x, y));
        before != self.hovered_index()
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.find_index(x, y)
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(idx, _)| idx)
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered_index()?)?;
        (area.rect == rect).then_some(area.hover_style).flatten()
    }

    pub fn hovered(&self) -> Option<&HitArea> {
        self.hovered_index().and_then(|idx| self.areas.get(idx))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
