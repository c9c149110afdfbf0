//! Display formatting shared by the terminal and JSON renderers.
//!
//! All helpers treat a missing value and a zero value the same way: zero
//! metrics in the dataset mean "not measured", not "measured as zero".

/// Shown for unavailable metrics on cards and in the detail view.
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown for unavailable cells in the table view.
pub const EMPTY_CELL: &str = "-";

/// Caption length on cards before truncation.
pub const CAPTION_LIMIT: usize = 100;

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Compact count: `1.2B`, `3.4M`, `5.6K`, or the plain number below 1000.
pub fn format_compact(value: Option<f64>) -> String {
    let Some(n) = present(value) else {
        return "0".to_string();
    };
    if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        plain_number(n)
    }
}

fn plain_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Integer with thousands separators, e.g. `12,345`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A ratio rendered as a percentage, e.g. `0.0412` at 2 decimals is `4.12%`.
pub fn format_rate(rate: Option<f64>, decimals: usize, missing: &str) -> String {
    match present(rate) {
        Some(r) => format!("{:.*}%", decimals, r * 100.0),
        None => missing.to_string(),
    }
}

/// A dollar amount, e.g. `$12` or `$12.50`.
pub fn format_cpm(cpm: Option<f64>, decimals: usize, missing: &str) -> String {
    match present(cpm) {
        Some(c) => format!("${:.*}", decimals, c),
        None => missing.to_string(),
    }
}

/// A plain number with fixed decimals, with an optional suffix.
pub fn format_fixed(value: Option<f64>, decimals: usize, suffix: &str, missing: &str) -> String {
    match present(value) {
        Some(v) => format!("{:.*}{}", decimals, v, suffix),
        None => missing.to_string(),
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when anything was dropped.
pub fn truncate(text: Option<&str>, max_chars: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Treat a blank string as absent for display.
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// The pre-formatted count string, or `"0"`.
pub fn formatted_count(formatted: Option<&str>) -> &str {
    non_empty(formatted).unwrap_or("0")
}

pub fn display_name(name: Option<&str>) -> &str {
    non_empty(name).unwrap_or("Unknown")
}

pub fn display_account(account: Option<&str>) -> &str {
    non_empty(account).unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_thresholds() {
        assert_eq!(format_compact(Some(1_500_000_000.0)), "1.5B");
        assert_eq!(format_compact(Some(2_340_000.0)), "2.3M");
        assert_eq!(format_compact(Some(1000.0)), "1.0K");
        assert_eq!(format_compact(Some(999.0)), "999");
        assert_eq!(format_compact(Some(12.5)), "12.5");
    }

    #[test]
    fn test_format_compact_missing_and_zero() {
        assert_eq!(format_compact(None), "0");
        assert_eq!(format_compact(Some(0.0)), "0");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234.0), "1,234");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(0.0412), 2, NOT_AVAILABLE), "4.12%");
        assert_eq!(format_rate(Some(0.0412), 3, NOT_AVAILABLE), "4.120%");
        assert_eq!(format_rate(None, 2, EMPTY_CELL), "-");
        assert_eq!(format_rate(Some(0.0), 2, NOT_AVAILABLE), "N/A");
    }

    #[test]
    fn test_format_cpm() {
        assert_eq!(format_cpm(Some(12.0), 0, NOT_AVAILABLE), "$12");
        assert_eq!(format_cpm(Some(12.5), 2, NOT_AVAILABLE), "$12.50");
        assert_eq!(format_cpm(None, 0, EMPTY_CELL), "-");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate(None, 5), "");
        assert_eq!(truncate(Some("short"), 5), "short");
        assert_eq!(truncate(Some("longer text"), 6), "longer...");
        assert_eq!(truncate(Some("한국어 캡션입니다"), 3), "한국어...");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(display_name(None), "Unknown");
        assert_eq!(display_account(None), "unknown");
        assert_eq!(display_name(Some("")), "Unknown");
        assert_eq!(display_account(Some("")), "unknown");
        assert_eq!(formatted_count(None), "0");
        assert_eq!(formatted_count(Some("1.2K")), "1.2K");
    }
}
