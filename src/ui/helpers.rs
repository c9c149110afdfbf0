//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for truncation, centering and common UI patterns.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for the loading screen
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick count. Advances every other tick.
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count / 2) as usize % SPINNER_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate `s` to at most `max_width` display columns, ending with `…` when cut.
///
/// Wide characters (CJK, emoji) count as two columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy character wrap of `text` into at most `max_lines` lines of `width` columns.
///
/// The last line ends with `…` when text is left over.
pub fn wrap_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    let mut chars = text.chars().filter(|c| *c != '\r').peekable();

    while let Some(c) = chars.next() {
        let w = c.width().unwrap_or(0);
        if c == '\n' || used + w > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
            if lines.len() == max_lines {
                let rest_is_blank = c.is_whitespace() && chars.peek().is_none();
                if !rest_is_blank {
                    if let Some(last) = lines.last_mut() {
                        *last = truncate_to_width(&format!("{last}…"), width);
                    }
                }
                return lines;
            }
            if c == '\n' {
                continue;
            }
        }
        current.push(c);
        used += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width of `s` in columns, as u16 for layout math.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width_ascii() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("abcdef", 3, 5), vec!["abc", "def"]);
        assert_eq!(wrap_text("ab\ncd", 10, 5), vec!["ab", "cd"]);
        assert_eq!(wrap_text("", 10, 5), Vec::<String>::new());
        assert!(wrap_text("abc", 0, 5).is_empty());
    }

    #[test]
    fn test_wrap_text_marks_overflow() {
        let lines = wrap_text("abcdefghij", 4, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "abcd");
        assert!(lines[1].ends_with('…'));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 50, 20), Rect::new(25, 10, 50, 20));
        assert_eq!(centered_rect(area, 200, 80), area);
    }

    #[test]
    fn test_inner_rect() {
        assert_eq!(inner_rect(Rect::new(2, 2, 10, 6), 1), Rect::new(3, 3, 8, 4));
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(2), "⠙");
        assert_eq!(spinner_frame(20), "⠋");
    }
}
