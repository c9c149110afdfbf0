//! Toolbar: search box, tier filter, sort settings, view toggle and page size.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::ViewMode;
use crate::ui::helpers::{display_width, truncate_to_width};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{hover_style, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_TIER};
use crate::view_state::RenderModel;

/// Height of the toolbar including borders
pub const TOOLBAR_HEIGHT: u16 = 3;

/// What the search box shows this frame.
#[derive(Debug, Clone, Copy)]
pub struct SearchBox<'a> {
    pub draft: &'a str,
    pub focused: bool,
    /// Cursor blink phase
    pub cursor_visible: bool,
}

pub fn tier_label(tier: Option<&str>) -> String {
    match tier {
        Some(tier) => tier.to_string(),
        None => "all tiers".to_string(),
    }
}

pub fn sort_label(model: &RenderModel) -> String {
    match model.query.sort_field {
        Some(field) => format!("{} {}", field.label(), model.query.sort_order.arrow()),
        None => format!("none {}", model.query.sort_order.arrow()),
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &RenderModel,
    search: SearchBox,
    registry: &mut HitAreaRegistry,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(62)])
        .split(area);

    render_search_box(frame, chunks[0], model, search);
    render_controls(frame, chunks[1], model, registry);
}

fn render_search_box(frame: &mut Frame, area: Rect, model: &RenderModel, search: SearchBox) {
    let border_color = if search.focused { COLOR_FOCUS } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" search ", Style::default().fg(COLOR_DIM)));

    let inner_width = area.width.saturating_sub(4) as usize;
    let line = if search.focused {
        // Keep the tail visible while typing
        let mut text = search.draft.to_string();
        while display_width(&text) as usize >= inner_width && !text.is_empty() {
            text.remove(0);
        }
        let cursor = if search.cursor_visible { "█" } else { " " };
        Line::from(vec![
            Span::styled(text, Style::default().fg(COLOR_ACCENT)),
            Span::styled(cursor, Style::default().fg(COLOR_FOCUS)),
        ])
    } else if model.query.search.trim().is_empty() {
        Line::styled("press / to search", Style::default().fg(COLOR_DIM))
    } else {
        Line::styled(
            truncate_to_width(&model.query.search, inner_width),
            Style::default().fg(COLOR_ACCENT),
        )
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_controls(frame: &mut Frame, area: Rect, model: &RenderModel, registry: &mut HitAreaRegistry) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(COLOR_DIM);
    let tier = truncate_to_width(&tier_label(model.query.active_tier()), 12);
    let sort = sort_label(model);

    let mut spans = vec![
        Span::styled("tier ", label),
        Span::styled(tier, Style::default().fg(COLOR_TIER)),
        Span::styled("  sort ", label),
        Span::styled(sort, Style::default().fg(COLOR_ACCENT)),
        Span::styled("  per page ", label),
        Span::styled(model.pagination.page_size.to_string(), Style::default().fg(COLOR_ACCENT)),
        Span::raw("  "),
    ];

    // View toggle sits at the end; register it as a click target.
    let prefix_width: u16 = spans.iter().map(|s| display_width(&s.content)).sum();
    let toggle_text = match model.view_mode {
        ViewMode::Card => "[cards]",
        ViewMode::Table => "[table]",
    };
    let toggle_rect = Rect {
        x: inner.x.saturating_add(prefix_width),
        y: inner.y,
        width: display_width(toggle_text).min(inner.width.saturating_sub(prefix_width)),
        height: 1.min(inner.height),
    };
    registry.register(toggle_rect, ClickAction::ToggleViewMode, Some(hover_style()));

    let toggle_style = registry.hover_style(toggle_rect).unwrap_or(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    spans.push(Span::styled(toggle_text, toggle_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
