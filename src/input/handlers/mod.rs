//! Command handlers for executing commands.
//!
//! Each handler returns `true` when it consumed the command:
//! - [`query`] - Search box, tier, sort and view mode
//! - [`pagination`] - Page navigation and page size
//! - [`records`] - Selection, modals, clipboard and browser

pub mod pagination;
pub mod query;
pub mod records;

pub use pagination::handle_pagination_command;
pub use query::{cycle_tier, handle_query_command, handle_search_command};
pub use records::handle_record_command;
