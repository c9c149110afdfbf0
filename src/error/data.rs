//! Dataset loading errors.

use std::fmt;
use std::path::PathBuf;

use crate::traits::HttpError;

/// Failures while fetching or parsing the dataset document.
#[derive(Debug, Clone)]
pub enum DataError {
    /// The dataset file does not exist.
    FileNotFound { path: PathBuf },

    /// The dataset file exists but could not be read.
    FileRead { path: PathBuf, message: String },

    /// Could not connect to the dataset URL.
    ConnectionFailed { url: String, message: String },

    /// The request for the dataset URL timed out.
    Timeout { url: String },

    /// The dataset URL answered with a non-2xx status.
    HttpStatus { url: String, status: u16 },

    /// The document is not valid JSON or has no `data` array.
    InvalidDocument {
        source: String,
        message: String,
        line: usize,
        column: usize,
    },
}

impl DataError {
    /// Classify a transport error for `url`.
    pub fn from_http(url: &str, err: HttpError) -> Self {
        match err {
            HttpError::Timeout(_) => DataError::Timeout {
                url: url.to_string(),
            },
            HttpError::ServerError { status, .. } => DataError::HttpStatus {
                url: url.to_string(),
                status,
            },
            other => DataError::ConnectionFailed {
                url: url.to_string(),
                message: other.to_string(),
            },
        }
    }

    pub fn invalid_document(source: impl Into<String>, err: &serde_json::Error) -> Self {
        DataError::InvalidDocument {
            source: source.into(),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::ConnectionFailed { .. } | DataError::Timeout { .. } => true,
            DataError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            DataError::FileNotFound { path } => {
                format!("Dataset file not found: '{}'", path.display())
            }
            DataError::FileRead { path, .. } => {
                format!("Could not read dataset file '{}'", path.display())
            }
            DataError::ConnectionFailed { url, .. } => {
                format!("Could not connect to {}", url)
            }
            DataError::Timeout { url } => format!("Timed out fetching {}", url),
            DataError::HttpStatus { status, .. } => {
                format!("Dataset request failed with HTTP {}", status)
            }
            DataError::InvalidDocument { source, line, .. } => {
                format!("'{}' is not a valid dataset (line {})", source, line)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DataError::FileNotFound { .. } => "E_DATA_NOT_FOUND",
            DataError::FileRead { .. } => "E_DATA_READ",
            DataError::ConnectionFailed { .. } => "E_DATA_CONNECT",
            DataError::Timeout { .. } => "E_DATA_TIMEOUT",
            DataError::HttpStatus { .. } => "E_DATA_HTTP",
            DataError::InvalidDocument { .. } => "E_DATA_INVALID",
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::FileNotFound { path } => {
                write!(f, "Dataset file not found: '{}'", path.display())
            }
            DataError::FileRead { path, message } => {
                write!(f, "Failed to read '{}': {}", path.display(), message)
            }
            DataError::ConnectionFailed { url, message } => {
                write!(f, "Connection to {} failed: {}", url, message)
            }
            DataError::Timeout { url } => write!(f, "Request to {} timed out", url),
            DataError::HttpStatus { url, status } => {
                write!(f, "HTTP {} from {}", status, url)
            }
            DataError::InvalidDocument {
                source,
                message,
                line,
                column,
            } => write!(
                f,
                "Invalid dataset document '{}' at {}:{}: {}",
                source, line, column, message
            ),
        }
    }
}

impl std::error::Error for DataError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_classification() {
        let url = "https://example.com/data.json";
        assert!(matches!(
            DataError::from_http(url, HttpError::Timeout("slow".into())),
            DataError::Timeout { .. }
        ));
        assert!(matches!(
            DataError::from_http(
                url,
                HttpError::ServerError {
                    status: 404,
                    message: "nope".into()
                }
            ),
            DataError::HttpStatus { status: 404, .. }
        ));
        assert!(matches!(
            DataError::from_http(url, HttpError::ConnectionFailed("refused".into())),
            DataError::ConnectionFailed { .. }
        ));
    }

    #[test]
    fn test_retryable() {
        assert!(DataError::Timeout { url: "u".into() }.is_retryable());
        assert!(DataError::HttpStatus {
            url: "u".into(),
            status: 503
        }
        .is_retryable());
        assert!(!DataError::HttpStatus {
            url: "u".into(),
            status: 404
        }
        .is_retryable());
        assert!(!DataError::FileNotFound {
            path: PathBuf::from("data.json")
        }
        .is_retryable());
    }

    #[test]
    fn test_invalid_document_records_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"data\": [,]\n}").unwrap_err();
        let data_err = DataError::invalid_document("data.json", &err);
        match data_err {
            DataError::InvalidDocument { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_error_codes_are_prefixed() {
        let err = DataError::FileRead {
            path: PathBuf::from("x"),
            message: "denied".into(),
        };
        assert!(err.error_code().starts_with("E_DATA_"));
        assert!(err.to_string().contains("denied"));
    }
}
