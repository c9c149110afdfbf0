//! Startup configuration.
//!
//! - [`config`] - [`DashboardConfig`] and its environment layer
//! - [`logging`] - tracing subscriber for TUI and headless runs

pub mod config;
pub mod logging;

pub use config::DashboardConfig;
pub use logging::{init_logging, LogTarget};
