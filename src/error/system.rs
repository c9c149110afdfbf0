//! System-related error types.
//!
//! Filesystem, environment and OS-level failures that are not specific to
//! the dataset itself.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum SystemError {
    /// Permission denied for a file or directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Failed to create a directory (log directory).
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Environment variable holds an unusable value.
    EnvironmentError { variable: String, message: String },
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied: cannot {} '{}'", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory '{}'", path.display())
            }
            SystemError::IoError { operation, path, .. } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::EnvironmentError { variable, message } => {
                format!("Environment variable '{}' is invalid: {}", variable, message)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(f, "Failed to create directory '{}': {}", path.display(), message)
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "I/O error during {} at '{}': {}", operation, p.display(), message),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::EnvironmentError { variable, message } => {
                write!(f, "Environment variable '{}' error: {}", variable, message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a [`SystemError`].
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_classify_permission_denied_with_path() {
        let err = classify_io_error(
            Error::new(ErrorKind::PermissionDenied, "denied"),
            Some(PathBuf::from("/var/log/reelscope")),
            "create log file",
        );
        assert!(matches!(err, SystemError::PermissionDenied { .. }));
        assert_eq!(err.error_code(), "E_SYS_PERM");
    }

    #[test]
    fn test_classify_other_kinds_as_io() {
        let err = classify_io_error(Error::new(ErrorKind::Other, "boom"), None, "write");
        match err {
            SystemError::IoError { message, path, .. } => {
                assert_eq!(message, "boom");
                assert!(path.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_user_messages() {
        let err = SystemError::EnvironmentError {
            variable: "REELSCOPE_PAGE_SIZE".to_string(),
            message: "expected a number".to_string(),
        };
        assert!(err.user_message().contains("REELSCOPE_PAGE_SIZE"));
    }
}
