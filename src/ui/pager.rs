//! Pagination bar: prev/next, numbered page buttons and the range label.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::pagination::PageButton;
use crate::ui::helpers::display_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{disabled_style, hover_style, COLOR_ACCENT, COLOR_DIM, COLOR_SELECTED_BG};
use crate::view_state::PaginationModel;

const PREV_LABEL: &str = "‹ prev";
const NEXT_LABEL: &str = "next ›";
const GAP: u16 = 1;

/// One segment of the bar: its text and what clicking it does.
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub text: String,
    /// `None` for disabled buttons and ellipsis markers.
    pub action: Option<ClickAction>,
    pub current: bool,
}

/// Lay out the bar items in display order.
pub fn bar_items(model: &PaginationModel) -> Vec<BarItem> {
    let mut items = Vec::with_capacity(model.buttons.len() + 2);
    items.push(BarItem {
        text: PREV_LABEL.to_string(),
        action: model.has_prev.then_some(ClickAction::PrevPage),
        current: false,
    });
    for button in &model.buttons {
        items.push(match button {
            PageButton::Page { number, current } => BarItem {
                text: format!(" {number} "),
                action: (!current).then_some(ClickAction::GoToPage(*number)),
                current: *current,
            },
            PageButton::Ellipsis => BarItem {
                text: "…".to_string(),
                action: None,
                current: false,
            },
        });
    }
    items.push(BarItem {
        text: NEXT_LABEL.to_string(),
        action: model.has_next.then_some(ClickAction::NextPage),
        current: false,
    });
    items
}

pub fn render(frame: &mut Frame, area: Rect, model: &PaginationModel, registry: &mut HitAreaRegistry) {
    if area.height == 0 {
        return;
    }

    // Range label on the right, always shown
    let range = Paragraph::new(Line::styled(model.range_text.clone(), Style::default().fg(COLOR_DIM)))
        .alignment(Alignment::Right);
    frame.render_widget(range, area);

    if !model.visible {
        return;
    }

    let items = bar_items(model);
    let total_width: u16 = items
        .iter()
        .map(|item| display_width(&item.text) + GAP)
        .sum::<u16>()
        .saturating_sub(GAP);
    let available = area
        .width
        .saturating_sub(display_width(&model.range_text) + 2);
    let mut x = area.x + available.saturating_sub(total_width) / 2;

    let mut spans = Vec::with_capacity(items.len() * 2);
    if x > area.x {
        spans.push(Span::raw(" ".repeat((x - area.x) as usize)));
    }

    for (i, item) in items.iter().enumerate() {
        let width = display_width(&item.text);
        let rect = Rect::new(x, area.y, width.min(area.right().saturating_sub(x)), 1);

        let base = if item.current {
            Style::default()
                .fg(COLOR_ACCENT)
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else if item.action.is_some() {
            Style::default().fg(COLOR_ACCENT)
        } else {
            disabled_style()
        };

        let style = match item.action {
            Some(action) => {
                registry.register(rect, action, Some(hover_style()));
                registry.hover_style(rect).unwrap_or(base)
            }
            None => base,
        };

        if i > 0 {
            spans.push(Span::raw(" ".repeat(GAP as usize)));
        }
        spans.push(Span::styled(item.text.clone(), style));
        x = x.saturating_add(width + GAP);
    }

    let bar_area = Rect {
        width: available.min(area.width),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), bar_area);
}
