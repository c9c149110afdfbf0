//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - production HTTP client using reqwest
//! - [`SystemClipboard`] / [`SystemBrowser`] - arboard and the platform URL opener
//! - [`mock`] - configurable doubles for tests

pub mod desktop;
pub mod mock;
pub mod reqwest_http;

pub use desktop::{SystemBrowser, SystemClipboard};
pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
