//! reelscope - a terminal dashboard for influencer and short-video records
//!
//! The library exposes every module so integration tests can drive the
//! query pipeline, the controller and the renderers without a terminal.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod headless;
pub mod input;
pub mod loader;
pub mod models;
pub mod pagination;
pub mod query;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod video;
pub mod view_state;
