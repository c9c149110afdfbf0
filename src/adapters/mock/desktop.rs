//! Recording clipboard and browser doubles.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{BrowserError, BrowserLauncher, ClipboardError, ClipboardProvider};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clipboard that records every copied string.
///
/// Clones share the same history, so a test can keep one handle while the
/// app owns another.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent copy fail with `err`.
    pub fn fail_with(&self, err: ClipboardError) {
        *lock(&self.failure) = Some(err);
    }

    pub fn copied(&self) -> Vec<String> {
        lock(&self.copied).clone()
    }
}

impl ClipboardProvider for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = lock(&self.failure).clone() {
            return Err(err);
        }
        lock(&self.copied).push(text.to_string());
        Ok(())
    }
}

/// Browser that records opened URLs instead of launching anything.
#[derive(Debug, Clone, Default)]
pub struct MockBrowser {
    opened: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        *lock(&self.fail) = fail;
    }

    pub fn opened(&self) -> Vec<String> {
        lock(&self.opened).clone()
    }
}

impl BrowserLauncher for MockBrowser {
    fn open_url(&mut self, url: &str) -> Result<(), BrowserError> {
        if *lock(&self.fail) {
            return Err(BrowserError {
                url: url.to_string(),
                message: "mock browser failure".to_string(),
            });
        }
        lock(&self.opened).push(url.to_string());
        Ok(())
    }
}
