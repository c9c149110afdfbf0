//! Footer: context-aware key hints and the toast notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{Notice, NoticeLevel};
use crate::input::{InputContext, ModalType};
use crate::ui::helpers::{display_width, truncate_to_width};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Key hints for the current input context.
pub fn footer_hint(ctx: &InputContext) -> &'static str {
    if ctx.search_focused {
        return "enter apply · esc cancel · ctrl+u clear";
    }
    match ctx.modal {
        ModalType::Detail => "y copy email · w video · b browser · esc close",
        ModalType::Video => "b open in browser · esc close",
        ModalType::None if ctx.is_table_view() => {
            "/ search · t tier · s sort · o order · 1-9 column · v cards · ←→ page · p size · q quit"
        }
        ModalType::None => {
            "/ search · t tier · s sort · o order · v table · ←→ page · p size · enter detail · q quit"
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &InputContext, notice: Option<&Notice>) {
    let toast = notice.map(|notice| {
        let (icon, color) = match notice.level {
            NoticeLevel::Info => ("✓", COLOR_SUCCESS),
            NoticeLevel::Error => ("✕", COLOR_ERROR),
        };
        let max = (area.width / 2) as usize;
        Span::styled(
            truncate_to_width(&format!("{icon} {} ", notice.message), max),
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD),
        )
    });

    let toast_width = toast.as_ref().map_or(0, |t| display_width(&t.content));
    let hint_width = area.width.saturating_sub(toast_width + 1) as usize;
    let hint = Line::styled(
        truncate_to_width(footer_hint(ctx), hint_width),
        Style::default().fg(COLOR_DIM),
    );
    frame.render_widget(Paragraph::new(hint), area);

    if let Some(toast) = toast {
        frame.render_widget(
            Paragraph::new(Line::from(toast)).alignment(Alignment::Right),
            area,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
