//! Unified error handling for reelscope.
//!
//! - **Error categories** classify failures for retry and hint decisions
//! - **Domain errors**: [`DataError`], [`SystemError`], [`UiError`]
//! - **Unified type**: [`ReelError`] wraps all of them, optionally with an [`ErrorContext`]
//! - **Result alias**: [`ReelResult<T>`] plus the [`ResultExt`] extension
//!
//! # Example
//!
//! ```ignore
//! use reelscope::error::{ErrorContext, ReelResult, ResultExt};
//!
//! async fn read(path: &Path) -> ReelResult<Vec<u8>> {
//!     tokio::fs::read(path)
//!         .await
//!         .with_context(|| ErrorContext::new("read_dataset").with_source(path.display().to_string()))
//! }
//! ```
//!
//! | Category | Typical cause | Retryable |
//! |----------|---------------|-----------|
//! | Network | Dataset host unreachable | Yes |
//! | Server | Non-2xx from dataset host | Yes |
//! | Data | Malformed dataset document | No |
//! | User | Missing dataset file | No |
//! | System | Filesystem, terminal | No |
//! | Configuration | Bad `REELSCOPE_*` value | No |

mod category;
mod context;
mod data;
mod reel_error;
mod result;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use data::DataError;
pub use reel_error::ReelError;
pub use result::{ReelResult, ResultExt};
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
