//! Test doubles for the trait abstractions.

pub mod desktop;
pub mod http;

pub use desktop::{MockBrowser, MockClipboard};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
