//! Result alias and context extension.

use super::context::ErrorContext;
use super::reel_error::ReelError;

/// Result type used across reelscope.
pub type ReelResult<T> = Result<T, ReelError>;

/// Attach an [`ErrorContext`] to a failing result.
pub trait ResultExt<T> {
    fn context(self, ctx: ErrorContext) -> ReelResult<T>;

    /// Like [`ResultExt::context`], building the context only on error.
    fn with_context<F>(self, f: F) -> ReelResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ReelError>,
{
    fn context(self, ctx: ErrorContext) -> ReelResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> ReelResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
