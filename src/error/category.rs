//! Error category classification.
//!
//! Categories drive what the front end does with a failure: whether a retry
//! makes sense and which hint is shown next to the message.

use std::fmt;

/// High-level classification of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Could not reach the dataset host, or the request timed out.
    Network,

    /// The dataset host answered with a non-success status.
    Server,

    /// The dataset document exists but is not a valid dataset.
    Data,

    /// User action required (missing file, bad path, bad flag).
    User,

    /// OS errors: filesystem, terminal, clipboard.
    System,

    /// Invalid environment or command-line configuration.
    Configuration,
}

impl ErrorCategory {
    /// Whether the same operation might succeed if simply repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Data => "data",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and the dataset URL",
            ErrorCategory::Server => "The dataset host returned an error. Try again later",
            ErrorCategory::Data => "Regenerate the dataset with the converter and try again",
            ErrorCategory::User => "Check the --data path and try again",
            ErrorCategory::System => "Check file permissions and your terminal",
            ErrorCategory::Configuration => "Check REELSCOPE_* variables and command-line flags",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Data.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(ErrorCategory::Data.to_string(), "data");
    }

    #[test]
    fn test_recovery_hints_are_distinct() {
        use std::collections::HashSet;
        let all = [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Data,
            ErrorCategory::User,
            ErrorCategory::System,
            ErrorCategory::Configuration,
        ];
        let hints: HashSet<_> = all.iter().map(|c| c.recovery_hint()).collect();
        assert_eq!(hints.len(), all.len());
    }
}
