//! Structured render contract.
//!
//! Renderers never read [`DashboardState`](crate::state::DashboardState)
//! directly. They receive a [`RenderModel`] that borrows the current page and
//! carries the pagination metadata, so the terminal renderer and the JSON
//! renderer consume exactly the same data.
//!
//! ```text
//! DashboardState ──render_model()──▶ RenderModel ──▶ ui::render (ratatui)
//!                                                └──▶ serde_json (headless)
//! ```

mod render_model;

pub use render_model::{PaginationModel, RenderModel};
