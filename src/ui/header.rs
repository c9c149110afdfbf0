//! Header with the dataset summary
//!
//! One bordered row of headline statistics: influencer count, total views,
//! total followers, average engagement and average CPM.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::format::{format_compact, format_cpm, format_rate, format_thousands, NOT_AVAILABLE};
use crate::models::SummaryStats;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_COST, COLOR_COUNT, COLOR_DIM, COLOR_HEADER, COLOR_RATE};
use crate::view_state::RenderModel;

/// Height of the header including borders
pub const HEADER_HEIGHT: u16 = 3;

/// Label/value pairs shown in the header, in display order.
pub fn summary_items(summary: &SummaryStats) -> [(&'static str, String); 5] {
    [
        ("influencers", format_thousands(summary.total_influencers)),
        ("views", format_compact(Some(summary.total_views))),
        ("followers", format_compact(Some(summary.total_followers))),
        (
            "avg engagement",
            format_rate(Some(summary.avg_engagement_rate), 2, NOT_AVAILABLE),
        ),
        ("avg cpm", format_cpm(Some(summary.avg_cpm), 2, NOT_AVAILABLE)),
    ]
}

fn value_color(index: usize) -> ratatui::style::Color {
    match index {
        0..=2 => COLOR_COUNT,
        3 => COLOR_RATE,
        _ => COLOR_COST,
    }
}

pub fn render(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " reelscope ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));

    let mut spans = Vec::with_capacity(16);
    for (i, (label, value)) in summary_items(model.summary).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(COLOR_BORDER)));
        }
        spans.push(Span::styled(format!("{label} "), Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(
            value,
            Style::default()
                .fg(value_color(i))
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Filtered count on the right when a filter narrows the view
    if model.query.has_filters() {
        spans.push(Span::styled("  │  ", Style::default().fg(COLOR_BORDER)));
        spans.push(Span::styled(
            format!("{} of {} match", model.filtered_count, model.dataset_count),
            Style::default().fg(COLOR_ACCENT),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_items_formatting() {
        let summary = SummaryStats {
            total_influencers: 1234.0,
            total_views: 5_600_000.0,
            total_followers: 78_900.0,
            avg_engagement_rate: 0.0523,
            avg_cpm: 12.5,
            ..SummaryStats::default()
        };
        let items = summary_items(&summary);

        assert_eq!(items[0], ("influencers", "1,234".to_string()));
        assert_eq!(items[1].1, "5.6M");
        assert_eq!(items[2].1, "78.9K");
        assert_eq!(items[3].1, "5.23%");
        assert_eq!(items[4].1, "$12.50");
    }

    #[test]
    fn test_zero_summary() {
        let items = summary_items(&SummaryStats::default());
        assert_eq!(items[0].1, "0");
        assert_eq!(items[1].1, "0");
        assert_eq!(items[3].1, "N/A");
        assert_eq!(items[4].1, "N/A");
    }
}
