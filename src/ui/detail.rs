//! Detail modal: every field of one record.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::format::{
    display_account, display_name, format_cpm, format_fixed, format_rate, formatted_count,
    non_empty, NOT_AVAILABLE,
};
use crate::models::Record;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::helpers::{display_width, wrap_text};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    hover_style, COLOR_ACCENT, COLOR_COST, COLOR_COUNT, COLOR_DIM, COLOR_HEADER, COLOR_RATE,
    COLOR_TIER,
};

/// Lines reserved for the profile intro and for the caption
const TEXT_BLOCK_LINES: usize = 3;

/// Label/value rows of the statistics section, in display order.
pub fn detail_stats(record: &Record) -> Vec<(&'static str, String)> {
    let text = |value: Option<&str>| non_empty(value).unwrap_or(NOT_AVAILABLE).to_string();

    let duration = record
        .video_duration
        .filter(|d| d.is_finite() && *d != 0.0)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |d| format!("{d}s"));

    let music = match (record.music_title.as_deref(), record.music_artist.as_deref()) {
        (title, Some(artist)) => format!("{} - {artist}", title.unwrap_or(NOT_AVAILABLE)),
        (title, None) => text(title),
    };

    vec![
        ("Followers", formatted_count(record.follower_count_formatted.as_deref()).to_string()),
        ("Views", formatted_count(record.views_count_formatted.as_deref()).to_string()),
        ("Likes", formatted_count(record.likes_count_formatted.as_deref()).to_string()),
        ("Comments", formatted_count(record.comments_count_formatted.as_deref()).to_string()),
        ("Shares", formatted_count(record.shares_count_formatted.as_deref()).to_string()),
        ("Engagement", format_rate(record.engagement_rate, 3, NOT_AVAILABLE)),
        ("View ratio", format_fixed(record.view_ratio, 2, "%", NOT_AVAILABLE)),
        ("Comment conversion", format_rate(record.comment_conversion, 3, NOT_AVAILABLE)),
        ("Follower quality", format_fixed(record.follower_quality, 2, "", NOT_AVAILABLE)),
        ("Estimated CPM", format_cpm(record.estimated_cpm, 2, NOT_AVAILABLE)),
        ("Cost efficiency", format_fixed(record.cost_efficiency, 3, "", NOT_AVAILABLE)),
        ("Uploads", format_fixed(record.upload_count, 0, "", "0")),
        ("Duration", duration),
        ("Music", music),
        ("Uploaded", text(record.upload_time.as_deref())),
        ("Tier", text(record.follower_tier.as_deref())),
        ("Type", text(record.influencer_type.as_deref())),
    ]
}

fn value_color(label: &str) -> ratatui::style::Color {
    match label {
        "Followers" | "Views" | "Likes" | "Comments" | "Shares" => COLOR_COUNT,
        "Engagement" | "Comment conversion" => COLOR_RATE,
        "Estimated CPM" | "Cost efficiency" => COLOR_COST,
        "Tier" => COLOR_TIER,
        _ => COLOR_ACCENT,
    }
}

/// Body lines of the modal for an inner width of `width` columns.
pub fn detail_lines(record: &Record, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let section = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(
            display_name(record.author_name.as_deref()).to_string(),
            section,
        ),
        Line::styled(format!("@{}", display_account(record.account_id.as_deref())), dim),
        Line::raw(""),
    ];

    for (title, body) in [
        ("Profile", record.profile_intro.as_deref()),
        ("Caption", record.video_caption.as_deref()),
    ] {
        lines.push(Line::styled(title, section));
        let body = body.unwrap_or(NOT_AVAILABLE);
        lines.extend(
            wrap_text(body, width, TEXT_BLOCK_LINES)
                .into_iter()
                .map(Line::raw),
        );
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Statistics", section));
    let stats = detail_stats(record);
    let label_width = stats.iter().map(|(l, _)| l.len()).max().unwrap_or(0) + 2;
    for (label, value) in stats {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<label_width$}"), dim),
            Span::styled(value, Style::default().fg(value_color(label))),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(match record.email.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(email) => Line::from(vec![
            Span::styled(format!("{:<label_width$}", "Email"), dim),
            Span::styled(email.to_string(), Style::default().fg(COLOR_ACCENT)),
        ]),
        None => Line::from(vec![
            Span::styled(format!("{:<label_width$}", "Email"), dim),
            Span::styled("No email", dim),
        ]),
    });

    lines
}

/// Action buttons along the bottom of the modal.
fn buttons(record: &Record) -> Vec<(&'static str, ClickAction)> {
    let mut buttons = Vec::with_capacity(3);
    if record.has_email() {
        buttons.push((" y copy email ", ClickAction::CopyEmail));
    }
    if record.video_url.is_some() {
        buttons.push((" w watch ", ClickAction::OpenVideo));
        buttons.push((" b open ↗ ", ClickAction::OpenInBrowser));
    }
    buttons
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    record: &Record,
    layout: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    // Width is not known until the frame is sized; measure with the widest case.
    let probe_width = layout.bounded_width(60, 40, 90).saturating_sub(4) as usize;
    let body_height = detail_lines(record, probe_width).len() as u16;
    let config = DialogFrameConfig::new("Detail", body_height + 2).hint("esc close");
    let inner = render_dialog_frame(frame, area, layout, &config, registry);
    if inner.height == 0 {
        return;
    }

    let content = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let lines = detail_lines(record, content.width as usize);
    frame.render_widget(Paragraph::new(lines), content);

    // Button row on the last inner line
    let y = inner.bottom().saturating_sub(1);
    let mut x = content.x;
    let mut spans = Vec::new();
    for (label, action) in buttons(record) {
        let width = display_width(label);
        if x + width > inner.right() {
            break;
        }
        let rect = Rect::new(x, y, width, 1);
        registry.register(rect, action, Some(hover_style()));
        let style = registry.hover_style(rect).unwrap_or(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::REVERSED),
        );
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(content.x, y, content.width, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat<'a>(stats: &'a [(&'static str, String)], label: &str) -> &'a str {
        stats
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_detail_stats_fallbacks() {
        let stats = detail_stats(&Record::new(1));
        assert_eq!(stat(&stats, "Followers"), "0");
        assert_eq!(stat(&stats, "Engagement"), "N/A");
        assert_eq!(stat(&stats, "Estimated CPM"), "N/A");
        assert_eq!(stat(&stats, "Uploads"), "0");
        assert_eq!(stat(&stats, "Duration"), "N/A");
        assert_eq!(stat(&stats, "Music"), "N/A");
        assert_eq!(stat(&stats, "Tier"), "N/A");
    }

    #[test]
    fn test_detail_stats_precision() {
        let mut record = Record::new(1);
        record.engagement_rate = Some(0.0425);
        record.comment_conversion = Some(0.0015);
        record.view_ratio = Some(12.5);
        record.follower_quality = Some(0.8);
        record.estimated_cpm = Some(7.5);
        record.cost_efficiency = Some(1.2346);
        record.upload_count = Some(42.0);
        record.video_duration = Some(15.0);
        record.music_title = Some("Song".to_string());
        record.music_artist = Some("Artist".to_string());

        let stats = detail_stats(&record);
        assert_eq!(stat(&stats, "Engagement"), "4.250%");
        assert_eq!(stat(&stats, "Comment conversion"), "0.150%");
        assert_eq!(stat(&stats, "View ratio"), "12.50%");
        assert_eq!(stat(&stats, "Follower quality"), "0.80");
        assert_eq!(stat(&stats, "Estimated CPM"), "$7.50");
        assert_eq!(stat(&stats, "Cost efficiency"), "1.235");
        assert_eq!(stat(&stats, "Uploads"), "42");
        assert_eq!(stat(&stats, "Duration"), "15s");
        assert_eq!(stat(&stats, "Music"), "Song - Artist");
    }

    #[test]
    fn test_detail_lines_show_missing_email() {
        let lines = detail_lines(&Record::new(1), 40);
        let last: String = lines
            .last()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .unwrap_or_default();
        assert!(last.ends_with("No email"));
    }

    #[test]
    fn test_buttons_depend_on_record() {
        assert!(buttons(&Record::new(1)).is_empty());

        let mut record = Record::new(1);
        record.email = Some("a@b.c".to_string());
        record.video_url = Some("https://www.tiktok.com/@a/video/1".to_string());
        let actions: Vec<ClickAction> = buttons(&record).into_iter().map(|(_, a)| a).collect();
        assert_eq!(
            actions,
            vec![ClickAction::CopyEmail, ClickAction::OpenVideo, ClickAction::OpenInBrowser]
        );
    }
}
