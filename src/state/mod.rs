//! Dashboard state.
//!
//! [`DashboardState`] owns the dataset, the query and pagination settings and
//! the derived filtered view. It is mutated only through
//! [`DashboardState::apply`], which takes an [`Action`] and reports a
//! [`Transition`] describing what the caller needs to redraw.

pub mod dashboard;

pub use dashboard::{Action, DashboardState, LoadStatus, Transition, ViewMode};
