//! Special state rendering
//!
//! Loading spinner, empty results and the "terminal too small" notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::ui::helpers::spinner_frame;
use crate::ui::theme::COLOR_DIM;

fn render_centered(frame: &mut Frame, area: Rect, text: Text) {
    let height = text.height() as u16;
    let y_offset = area.height.saturating_sub(height) / 2;
    let centered = Rect::new(area.x, area.y + y_offset, area.width, height.min(area.height));
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), centered);
}

/// Spinner shown while the dataset is being fetched
pub fn render_loading(frame: &mut Frame, area: Rect, source: &str, tick_count: u64) {
    let text = Text::from(vec![
        Line::styled(
            format!("{} loading", spinner_frame(tick_count)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(source.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    render_centered(frame, area, text);
}

/// Shown when the filtered view is empty
pub fn render_empty(frame: &mut Frame, area: Rect, has_filters: bool, load_failed: bool) {
    let (headline, hint) = if load_failed {
        ("no data", "the dataset could not be loaded")
    } else if has_filters {
        ("no matches", "press c to clear search and tier")
    } else {
        ("no influencers", "the dataset is empty")
    };

    let text = Text::from(vec![
        Line::styled(
            headline,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(hint, Style::default().fg(COLOR_DIM)),
    ]);
    render_centered(frame, area, text);
}

/// Shown instead of the dashboard when the terminal is too small
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let warning = Line::styled(
        "⚠ terminal too small",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    render_centered(frame, area, Text::from(warning));
}

// ============================================================================
// Tests
// ============================================================================
