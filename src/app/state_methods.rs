//! State accessor and utility methods for the App.

use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{App, AppMessage, Focus, Notice, NoticeLevel, Overlay};
use crate::error::UiError;
use crate::models::Record;
use crate::ui::CURSOR_BLINK_TICKS;
use crate::video::VideoEmbed;

impl App {
    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Advance the spinner and expire toasts.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
            self.mark_dirty();
        }
        if self.dashboard.status().is_loading() {
            self.mark_dirty();
        }
        if self.focus == Focus::Search && self.tick_count % CURSOR_BLINK_TICKS == 0 {
            self.mark_dirty();
        }
    }

    /// Record the new terminal size; the next frame is laid out for it.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if (width, height) != (self.terminal_width, self.terminal_height) {
            debug!(width, height, "Terminal resized");
        }
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::transient(message, NoticeLevel::Info, Instant::now()));
        self.mark_dirty();
    }

    pub fn notify_error(&mut self, err: impl Into<UiError>) {
        let err = err.into();
        warn!(code = err.error_code(), error = %err, "User action failed");
        self.notice = Some(Notice::transient(
            err.user_message(),
            NoticeLevel::Error,
            Instant::now(),
        ));
        self.mark_dirty();
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Number of records on the current page.
    pub fn page_len(&self) -> usize {
        self.dashboard.window().slice(self.dashboard.filtered_view()).len()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.dashboard.page_records().get(self.selected).copied()
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.page_len() {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    /// Select a row by position, ignoring rows past the end of the page.
    pub fn select_row(&mut self, row: usize) -> bool {
        if row < self.page_len() {
            self.selected = row;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    /// The record an action applies to: the open modal's record, else the selection.
    pub fn target_record(&self) -> Option<&Record> {
        match &self.overlay {
            Some(overlay) => self.dashboard.find_in_view(overlay.record_id()),
            None => self.selected_record(),
        }
    }

    // ------------------------------------------------------------------------
    // Record actions
    // ------------------------------------------------------------------------

    pub fn open_detail(&mut self) {
        if let Some(record_id) = self.target_record().map(|r| r.id) {
            debug!(record_id, "Opening detail modal");
            self.overlay = Some(Overlay::Detail { record_id });
            self.mark_dirty();
        }
    }

    /// Open the video modal, or show a toast when the record has no usable URL.
    pub fn open_video(&mut self) {
        let Some(record) = self.target_record() else {
            return;
        };
        let record_id = record.id;
        match VideoEmbed::from_record_url(record.video_url.as_deref()) {
            Ok(embed) => {
                debug!(record_id, video_id = %embed.video_id, "Opening video modal");
                self.overlay = Some(Overlay::Video { record_id, embed });
                self.mark_dirty();
            }
            Err(e) => self.notify_error(e),
        }
    }

    pub fn copy_email(&mut self) {
        let Some(record) = self.target_record() else {
            return;
        };
        let Some(email) = record.email.clone().filter(|_| record.has_email()) else {
            self.notify("No email");
            return;
        };

        match self.clipboard().set_text(&email) {
            Ok(()) => self.notify(format!("Copied {email}")),
            Err(e) => self.notify_error(e),
        }
    }

    /// Open the record's video page in the system browser.
    pub fn open_in_browser(&mut self) {
        let Some(record) = self.target_record() else {
            return;
        };
        let url = match VideoEmbed::from_record_url(record.video_url.as_deref()) {
            Ok(embed) => embed.canonical_url,
            Err(e) => {
                self.notify_error(e);
                return;
            }
        };

        match self.browser().open_url(&url) {
            Ok(()) => self.notify("Opened in browser"),
            Err(e) => self.notify_error(e),
        }
    }

    pub fn close_overlay(&mut self) {
        if self.overlay.take().is_some() {
            self.mark_dirty();
        }
    }
}
