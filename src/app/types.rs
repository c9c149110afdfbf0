//! Type definitions for the application state.
//!
//! - [`Focus`] - Whether keys go to the dashboard or the search box
//! - [`Overlay`] - The modal drawn above the dashboard, if any
//! - [`Notice`] - Toast shown in the footer

use std::time::{Duration, Instant};

use crate::video::VideoEmbed;

/// How long a transient toast stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Which component receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Dashboard,
    Search,
}

/// Modal drawn above the dashboard.
///
/// Records are referenced by id; the filtered view cannot change while a
/// modal is open because the modal captures all input.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Detail { record_id: i64 },
    Video { record_id: i64, embed: VideoEmbed },
}

impl Overlay {
    pub fn record_id(&self) -> i64 {
        match self {
            Overlay::Detail { record_id } | Overlay::Video { record_id, .. } => *record_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Footer toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    /// `None` keeps the notice until it is replaced.
    pub expires_at: Option<Instant>,
}

impl Notice {
    pub fn transient(message: impl Into<String>, level: NoticeLevel, now: Instant) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Some(now + NOTICE_TTL),
        }
    }

    pub fn persistent(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_notice_expires() {
        let now = Instant::now();
        let notice = Notice::transient("Email copied", NoticeLevel::Info, now);
        assert!(!notice.is_expired(now));
        assert!(notice.is_expired(now + NOTICE_TTL));
    }

    #[test]
    fn test_persistent_notice_never_expires() {
        let notice = Notice::persistent("load failed", NoticeLevel::Error);
        assert!(!notice.is_expired(Instant::now() + Duration::from_secs(3600)));
    }
}
