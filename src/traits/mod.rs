//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used by the dataset loader
//! - [`ClipboardProvider`] / [`BrowserLauncher`] - desktop side effects triggered from the dashboard

pub mod desktop;
pub mod http;

pub use desktop::{BrowserError, BrowserLauncher, ClipboardError, ClipboardProvider};
pub use http::{Headers, HttpClient, HttpError, Response};
