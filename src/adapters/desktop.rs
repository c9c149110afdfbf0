//! System clipboard and browser adapters.

use arboard::Clipboard;
use tracing::debug;

use crate::traits::{BrowserError, BrowserLauncher, ClipboardError, ClipboardProvider};

/// [`ClipboardProvider`] backed by `arboard`.
///
/// The OS clipboard handle is opened lazily on first use and kept afterwards;
/// on X11 dropping it too early can lose the copied text.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }

        let clipboard = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard,
            None => {
                let opened =
                    Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                self.clipboard.insert(opened)
            }
        };

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        debug!(chars = text.chars().count(), "Copied text to clipboard");
        Ok(())
    }
}

/// [`BrowserLauncher`] that hands the URL to the platform opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open_url(&mut self, url: &str) -> Result<(), BrowserError> {
        open::that(url).map_err(|e| BrowserError {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
