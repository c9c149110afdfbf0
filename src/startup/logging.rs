//! Tracing subscriber setup.
//!
//! The dashboard owns the terminal, so in TUI mode logs go to a file under
//! the user cache directory. Headless runs log to stderr, keeping stdout
//! clean for the JSON document.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{classify_io_error, ReelResult, SystemError};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Preferred filter variable; `RUST_LOG` is consulted when it is unset.
pub const ENV_LOG: &str = "REELSCOPE_LOG";
const DEFAULT_FILTER: &str = "info";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `<cache dir>/reelscope/reelscope.log`, or stderr when the platform
    /// has no cache directory.
    pub fn default_file() -> Self {
        match dirs::cache_dir() {
            Some(dir) => LogTarget::File(dir.join("reelscope").join("reelscope.log")),
            None => LogTarget::Stderr,
        }
    }
}

/// Filter directive from `REELSCOPE_LOG`, then `RUST_LOG`, then `info`.
pub fn filter_directive<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    [ENV_LOG, "RUST_LOG"]
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber. Call once, early in `main`.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(target: LogTarget) -> ReelResult<()> {
    let directive = filter_directive(|key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| classify_io_error(e, Some(path.clone()), "open log file"))?;
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_own_variable() {
        let directive = filter_directive(|key| match key {
            ENV_LOG => Some("debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(directive, "debug");
    }

    #[test]
    fn test_filter_falls_back_to_rust_log() {
        let directive = filter_directive(|key| match key {
            ENV_LOG => Some("  ".to_string()),
            "RUST_LOG" => Some("reelscope=trace".to_string()),
            _ => None,
        });
        assert_eq!(directive, "reelscope=trace");
    }

    #[test]
    fn test_filter_default() {
        assert_eq!(filter_directive(|_| None), "info");
    }

    #[test]
    fn test_unwritable_log_directory_is_a_system_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let err = init_logging(LogTarget::File(blocker.join("reelscope.log"))).unwrap_err();
        assert_eq!(err.error_code(), "E_SYS_DIR_CREATE");
    }

    #[test]
    fn test_default_file_lives_under_reelscope() {
        if let LogTarget::File(path) = LogTarget::default_file() {
            assert!(path.ends_with("reelscope/reelscope.log"));
        }
    }
}
