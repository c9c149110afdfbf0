//! UI-related error types.
//!
//! Terminal, event channel and desktop-integration failures.

use std::fmt;

#[derive(Debug, Clone)]
pub enum UiError {
    /// Terminal initialization failed.
    TerminalInitFailed { message: String },

    /// Terminal restore failed.
    TerminalRestoreFailed { message: String },

    /// Drawing a frame failed.
    RenderFailed { message: String },

    /// Reading terminal events failed.
    InputError { message: String },

    /// Clipboard operation failed.
    ClipboardError { operation: String, message: String },

    /// Browser launch failed.
    BrowserLaunchFailed { url: String, message: String },

    /// The video URL has no recognizable video id.
    InvalidVideoUrl { url: String },
}

impl UiError {
    /// Whether the dashboard can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            UiError::TerminalInitFailed { .. }
                | UiError::TerminalRestoreFailed { .. }
                | UiError::InputError { .. }
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Is this an interactive terminal?".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore the terminal. Run `reset` if the prompt looks wrong.".to_string()
            }
            UiError::RenderFailed { .. } => "Failed to draw the dashboard".to_string(),
            UiError::InputError { .. } => "Failed to read keyboard input".to_string(),
            UiError::ClipboardError { .. } => "Failed to copy email".to_string(),
            UiError::BrowserLaunchFailed { url, .. } => {
                format!("Could not open a browser. Open manually: {}", url)
            }
            UiError::InvalidVideoUrl { .. } => "Invalid TikTok video URL".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::InputError { .. } => "E_UI_INPUT",
            UiError::ClipboardError { .. } => "E_UI_CLIPBOARD",
            UiError::BrowserLaunchFailed { .. } => "E_UI_BROWSER",
            UiError::InvalidVideoUrl { .. } => "E_UI_VIDEO_URL",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::TerminalInitFailed { message } => {
                write!(f, "Terminal initialization failed: {}", message)
            }
            UiError::TerminalRestoreFailed { message } => {
                write!(f, "Terminal restore failed: {}", message)
            }
            UiError::RenderFailed { message } => write!(f, "Render failed: {}", message),
            UiError::InputError { message } => write!(f, "Input error: {}", message),
            UiError::ClipboardError { operation, message } => {
                write!(f, "Clipboard {} failed: {}", operation, message)
            }
            UiError::BrowserLaunchFailed { url, message } => {
                write!(f, "Failed to open browser for '{}': {}", url, message)
            }
            UiError::InvalidVideoUrl { url } => write!(f, "No video id in '{}'", url),
        }
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_errors_not_recoverable() {
        let err = UiError::TerminalInitFailed {
            message: "no tty".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.error_code(), "E_UI_TERM_INIT");
    }

    #[test]
    fn test_clipboard_error_is_recoverable() {
        let err = UiError::ClipboardError {
            operation: "write".to_string(),
            message: "no display".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Failed to copy email");
    }

    #[test]
    fn test_invalid_video_url_message() {
        let err = UiError::InvalidVideoUrl {
            url: "https://example.com".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid TikTok video URL");
        assert!(err.to_string().contains("example.com"));
    }
}
