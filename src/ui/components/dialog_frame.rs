//! Dialog Frame Component
//!
//! A centered modal frame with rounded borders, a title and a clickable
//! `[x]` close marker. Handles background clearing and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::helpers::display_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{hover_style, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

const CLOSE_LABEL: &str = "[x]";

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the top border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Key hint displayed in the bottom border
    pub hint: Option<&'a str>,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            hint: None,
            min_width: 40,
            max_width: 90,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        area_width.saturating_sub(2)
    } else if ctx.is_narrow() {
        ctx.bounded_width(85, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(60, config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Total dialog height for the given content, clamped to the screen.
pub fn calculate_total_dialog_height(content_height: u16, area_height: u16) -> u16 {
    (content_height + 2).min(area_height)
}

/// Render a dialog frame and return the inner content area.
///
/// Registers the whole dialog as an inert target (so clicks do not fall
/// through to the page underneath) and the `[x]` marker as a close button.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
    registry: &mut HitAreaRegistry,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height, area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the background behind the dialog
    frame.render_widget(Clear, dialog_area);

    // Swallow clicks inside the dialog body
    registry.register(dialog_area, ClickAction::Noop, None);

    let close_width = display_width(CLOSE_LABEL);
    let close_rect = Rect {
        x: dialog_area.right().saturating_sub(close_width + 1),
        y: dialog_area.y,
        width: close_width,
        height: 1,
    };
    registry.register(close_rect, ClickAction::CloseOverlay, Some(hover_style()));
    let close_style = registry
        .hover_style(close_rect)
        .unwrap_or(Style::default().fg(COLOR_DIM));

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .title(Line::from(Span::styled(CLOSE_LABEL, close_style)).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    if let Some(hint) = config.hint {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(COLOR_DIM),
        )));
    }

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

// ============================================================================
// Tests
// ============================================================================
