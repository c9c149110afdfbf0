//! Card grid view
//!
//! One bordered card per record on the current page, laid out in as many
//! columns as the terminal allows. When the page has more cards than fit,
//! the grid scrolls so the selected card stays visible.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::format::{
    display_account, display_name, format_cpm, format_rate, formatted_count, non_empty, truncate,
    CAPTION_LIMIT, NOT_AVAILABLE,
};
use crate::models::Record;
use crate::ui::helpers::truncate_to_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::{LayoutContext, CARD_HEIGHT};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_COST, COLOR_COUNT, COLOR_DIM, COLOR_HEADER, COLOR_RATE,
    COLOR_SELECTED_BG, COLOR_TIER,
};
use crate::view_state::RenderModel;

/// First grid row to draw so that `selected` is on screen.
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    let visible_rows = visible_rows.max(1);
    (selected_row + 1).saturating_sub(visible_rows)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &RenderModel,
    selected: usize,
    layout: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let columns = layout.card_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = first_visible_row(selected, columns, visible_rows);
    let card_width = area.width / columns as u16;

    for (idx, record) in model.records.iter().enumerate() {
        let row = idx / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = idx % columns;
        let y = area.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        let card_area = Rect {
            x: area.x + col as u16 * card_width,
            y,
            width: card_width,
            height,
        };

        registry.register(card_area, ClickAction::OpenRecord(idx), None);
        render_card(frame, card_area, record, idx == selected);
    }
}

/// Lines of a card's body, already fitted to `width` columns.
pub fn card_lines(record: &Record, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);

    let email_line = match record.email.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(email) => Line::from(vec![
            Span::styled("✉ ", dim),
            Span::styled(truncate_to_width(email, width.saturating_sub(2)), Style::default().fg(COLOR_ACCENT)),
        ]),
        None => Line::styled("✉ No email", dim),
    };

    let caption = truncate(record.video_caption.as_deref(), CAPTION_LIMIT);

    vec![
        Line::styled(
            truncate_to_width(&format!("@{}", display_account(record.account_id.as_deref())), width),
            dim,
        ),
        email_line,
        Line::from(vec![
            Span::styled("followers ", dim),
            Span::styled(
                formatted_count(record.follower_count_formatted.as_deref()).to_string(),
                Style::default().fg(COLOR_COUNT),
            ),
            Span::styled("  views ", dim),
            Span::styled(
                formatted_count(record.views_count_formatted.as_deref()).to_string(),
                Style::default().fg(COLOR_COUNT),
            ),
        ]),
        Line::from(vec![
            Span::styled("engagement ", dim),
            Span::styled(
                format_rate(record.engagement_rate, 2, NOT_AVAILABLE),
                Style::default().fg(COLOR_RATE),
            ),
            Span::styled("  cpm ", dim),
            Span::styled(
                format_cpm(record.estimated_cpm, 0, NOT_AVAILABLE),
                Style::default().fg(COLOR_COST),
            ),
        ]),
        Line::raw(truncate_to_width(&caption, width)),
        if record.video_url.is_some() {
            Line::styled("▶ w video  ↗ b open", dim)
        } else {
            Line::raw("")
        },
    ]
}

fn render_card(frame: &mut Frame, area: Rect, record: &Record, selected: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let tier = non_empty(record.follower_tier.as_deref());
    let title_width = inner_width.saturating_sub(tier.map_or(0, |t| t.chars().count() + 3));
    let mut title = vec![Span::styled(
        format!(" {} ", truncate_to_width(display_name(record.author_name.as_deref()), title_width.saturating_sub(2))),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(tier) = tier {
        title.push(Span::styled(format!("[{tier}]"), Style::default().fg(COLOR_TIER)));
    }

    let (border_color, base) = if selected {
        (COLOR_ACCENT, Style::default().bg(COLOR_SELECTED_BG))
    } else {
        (COLOR_BORDER, Style::default())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(base)
        .title(Line::from(title));

    let paragraph = Paragraph::new(card_lines(record, inner_width)).block(block);
    frame.render_widget(paragraph, area);
}
