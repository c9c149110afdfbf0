//! Desktop integration: the system clipboard and the default browser.

use thiserror::Error;

use crate::error::UiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("nothing to copy")]
    Empty,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write rejected: {0}")]
    WriteFailed(String),
}

impl From<ClipboardError> for UiError {
    fn from(err: ClipboardError) -> Self {
        UiError::ClipboardError {
            operation: "copy".to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not open {url}: {message}")]
pub struct BrowserError {
    pub url: String,
    pub message: String,
}

impl From<BrowserError> for UiError {
    fn from(err: BrowserError) -> Self {
        UiError::BrowserLaunchFailed {
            url: err.url,
            message: err.message,
        }
    }
}

/// Write access to a text clipboard.
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Opens URLs outside the terminal.
pub trait BrowserLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), BrowserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_maps_to_copy_toast() {
        let ui: UiError = ClipboardError::Unavailable("no display".to_string()).into();
        assert_eq!(ui.user_message(), "Failed to copy email");
    }

    #[test]
    fn test_browser_error_keeps_url() {
        let ui: UiError = BrowserError {
            url: "https://www.tiktok.com/@a/video/1".to_string(),
            message: "no handler".to_string(),
        }
        .into();
        assert!(ui.user_message().contains("https://www.tiktok.com/@a/video/1"));
    }
}
