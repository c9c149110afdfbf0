//! Unified error type for reelscope.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::data::DataError;
use super::system::SystemError;
use super::ui::UiError;

/// Every error the dashboard can surface.
#[derive(Debug)]
pub enum ReelError {
    /// Dataset fetch or parse failures.
    Data(DataError),

    /// Filesystem, environment and task failures.
    System(SystemError),

    /// Terminal and desktop-integration failures.
    Ui(UiError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<ReelError>,
        context: ErrorContext,
    },
}

impl ReelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReelError::Data(err) => match err {
                DataError::ConnectionFailed { .. } | DataError::Timeout { .. } => ErrorCategory::Network,
                DataError::HttpStatus { .. } => ErrorCategory::Server,
                DataError::InvalidDocument { .. } => ErrorCategory::Data,
                DataError::FileNotFound { .. } => ErrorCategory::User,
                DataError::FileRead { .. } => ErrorCategory::System,
            },
            ReelError::System(SystemError::EnvironmentError { .. }) => ErrorCategory::Configuration,
            ReelError::System(_) => ErrorCategory::System,
            ReelError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            ReelError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ReelError::Data(err) => err.is_retryable(),
            ReelError::System(_) | ReelError::Ui(_) => false,
            ReelError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Short message suitable for a toast or the failed-load banner.
    pub fn user_message(&self) -> String {
        match self {
            ReelError::Data(err) => err.user_message(),
            ReelError::System(err) => err.user_message(),
            ReelError::Ui(err) => err.user_message(),
            ReelError::WithContext { error, .. } => error.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ReelError::Data(err) => err.error_code(),
            ReelError::System(err) => err.error_code(),
            ReelError::Ui(err) => err.error_code(),
            ReelError::WithContext { error, .. } => error.error_code(),
        }
    }

    pub fn with_context(self, ctx: ErrorContext) -> Self {
        ReelError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ReelError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The innermost error, with any context wrappers removed.
    pub fn inner(&self) -> &ReelError {
        match self {
            ReelError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for ReelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReelError::Data(err) => write!(f, "{}", err),
            ReelError::System(err) => write!(f, "{}", err),
            ReelError::Ui(err) => write!(f, "{}", err),
            ReelError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for ReelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReelError::Data(err) => Some(err),
            ReelError::System(err) => Some(err),
            ReelError::Ui(err) => Some(err),
            ReelError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations
// ============================================================================

impl From<DataError> for ReelError {
    fn from(err: DataError) -> Self {
        ReelError::Data(err)
    }
}

impl From<SystemError> for ReelError {
    fn from(err: SystemError) -> Self {
        ReelError::System(err)
    }
}

impl From<UiError> for ReelError {
    fn from(err: UiError) -> Self {
        ReelError::Ui(err)
    }
}

impl From<std::io::Error> for ReelError {
    fn from(err: std::io::Error) -> Self {
        ReelError::System(super::system::classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        ReelError::Data(DataError::invalid_document("<memory>", &err))
    }
}
