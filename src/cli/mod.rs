//! Command-line interface for reelscope.
//!
//! Parsing is done with clap; the parsed [`CliArgs`] are layered on top of
//! the environment configuration before the dashboard starts:
//!
//! ```ignore
//! use clap::Parser;
//! use reelscope::cli::CliArgs;
//! use reelscope::startup::DashboardConfig;
//!
//! let args = CliArgs::parse();
//! let config = args.apply(DashboardConfig::from_env());
//! ```

pub mod args;

pub use args::CliArgs;

/// Version string reported by `--version` and in the log file.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
