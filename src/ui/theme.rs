//! Color theme constants for the dashboard UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for labels and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected card / row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 36, 60);

/// Focused search box border
pub const COLOR_FOCUS: Color = Color::Cyan;

// ============================================================================
// Metric Colors
// ============================================================================

/// Follower / view counts
pub const COLOR_COUNT: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Engagement rate
pub const COLOR_RATE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Cost figures (CPM)
pub const COLOR_COST: Color = Color::Yellow;

/// Tier badge
pub const COLOR_TIER: Color = Color::Magenta;

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_SUCCESS: Color = Color::LightGreen;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for modal dialogs (detail, video)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Style for the hovered clickable element
pub fn hover_style() -> Style {
    Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::UNDERLINED)
}

/// Style for a disabled control (prev on page 1, next on the last page)
pub fn disabled_style() -> Style {
    Style::default().fg(COLOR_DIM)
}
