//! Video modal: embed details for a record's video.
//!
//! A terminal cannot play the embed, so the modal shows the resolved embed
//! URL and offers to open the canonical URL in the browser.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::format::display_name;
use crate::models::Record;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::helpers::display_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{hover_style, COLOR_ACCENT, COLOR_COUNT, COLOR_DIM, COLOR_HEADER};
use crate::video::VideoEmbed;

const OPEN_BUTTON: &str = " b open in browser ↗ ";

pub fn video_lines(embed: &VideoEmbed, record: Option<&Record>) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    let field = |label: &'static str, value: String, color| {
        Line::from(vec![
            Span::styled(format!("{label:<9}"), dim),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let mut lines = Vec::with_capacity(8);
    if let Some(record) = record {
        lines.push(Line::styled(
            display_name(record.author_name.as_deref()).to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(field("creator", format!("@{}", embed.username), COLOR_ACCENT));
    lines.push(field("video id", embed.video_id.clone(), COLOR_ACCENT));
    lines.push(Line::raw(""));
    lines.push(field("embed", embed.embed_url.clone(), COLOR_COUNT));
    lines.push(field("url", embed.canonical_url.clone(), COLOR_COUNT));
    lines
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    embed: &VideoEmbed,
    record: Option<&Record>,
    layout: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let lines = video_lines(embed, record);
    // Room for long URLs to wrap onto a second line, plus the button row
    let config = DialogFrameConfig::new("Video", lines.len() as u16 + 4).hint("esc close");
    let inner = render_dialog_frame(frame, area, layout, &config, registry);
    if inner.height < 2 {
        return;
    }

    let content = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height - 2,
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);

    let y = inner.bottom() - 1;
    let width = display_width(OPEN_BUTTON).min(content.width);
    let rect = Rect::new(content.x, y, width, 1);
    registry.register(rect, ClickAction::OpenInBrowser, Some(hover_style()));
    let style = registry.hover_style(rect).unwrap_or(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::REVERSED),
    );
    frame.render_widget(Paragraph::new(Line::styled(OPEN_BUTTON, style)), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_video_lines() {
        let embed = VideoEmbed::parse("https://www.tiktok.com/@mina/video/7311").unwrap();
        let out = text(&video_lines(&embed, None));

        assert!(out.contains("@mina"));
        assert!(out.contains("7311"));
        assert!(out.contains("https://www.tiktok.com/embed/v2/7311"));
        assert!(out.contains("https://www.tiktok.com/@mina/video/7311"));
    }

    #[test]
    fn test_video_lines_with_record_name() {
        let embed = VideoEmbed::parse("https://www.tiktok.com/video/9").unwrap();
        let mut record = Record::new(1);
        record.author_name = Some("Mina".to_string());
        let lines = video_lines(&embed, Some(&record));

        assert_eq!(text(&lines[..1]), "Mina");
        assert!(text(&lines).contains("@user"));
    }
}
