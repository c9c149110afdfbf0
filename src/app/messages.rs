//! AppMessage enum for async communication within the application.

use crate::models::Dataset;

/// Messages sent from background tasks to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The one-time dataset fetch succeeded.
    DatasetLoaded(Box<Dataset>),
    /// The dataset fetch failed; `message` is shown to the user.
    DatasetLoadFailed { message: String },
}
