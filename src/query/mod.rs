//! Query engine: search, tier filter and sort over the loaded dataset.
//!
//! [`apply`] is a pure function of `(dataset, query)`. It returns the filtered
//! view as indices into [`Dataset::records`](crate::models::Dataset::records),
//! so the result can never contain a record that is not in the dataset.

mod engine;
mod state;

pub use engine::{apply, compare_records, matches};
pub use state::{QueryState, SortOrder};
