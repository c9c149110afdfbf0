//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the renderers ask: how many card columns fit, how wide a dialog
//! should be, and whether the terminal is too small to draw the dashboard.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Below this height the dashboard is not drawn at all
    pub const MIN_HEIGHT: u16 = 12;
    /// Below this width the dashboard is not drawn at all
    pub const MIN_WIDTH: u16 = 40;
}

/// Minimum width of a single card, borders included
pub const CARD_MIN_WIDTH: u16 = 36;

/// Height of a card, borders included
pub const CARD_HEIGHT: u16 = 9;

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]` and to the terminal width.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage)
            .clamp(min, max)
            .min(self.width)
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Whether the dashboard fits at all.
    pub fn is_too_small(&self) -> bool {
        self.width < breakpoints::MIN_WIDTH || self.height < breakpoints::MIN_HEIGHT
    }

    /// Number of card columns for a body of `body_width` columns.
    pub fn card_columns(&self, body_width: u16) -> usize {
        let by_width = (body_width / CARD_MIN_WIDTH).max(1) as usize;
        let cap = if self.width < breakpoints::MD_WIDTH { 2 } else { 3 };
        by_width.min(cap)
    }
}
