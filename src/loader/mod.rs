//! Dataset loading.
//!
//! The dataset is a single JSON document read once at startup, either from a
//! local file or over HTTP. Loading never retries; a failure is reported to
//! the caller, which shows it and carries on with an empty dashboard.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{DataError, ErrorContext, ReelResult, ResultExt};
use crate::models::Dataset;
use crate::traits::{Headers, HttpClient};

/// Where the dataset document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs; everything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from("data.json"))
    }
}

/// Fetch and parse the dataset from `source`.
pub async fn load_dataset<C>(source: &DataSource, client: &C) -> ReelResult<Dataset>
where
    C: HttpClient + ?Sized,
{
    let ctx = || {
        ErrorContext::new("load_dataset")
            .with_source(source.to_string())
            .with_component("loader")
    };

    let bytes = fetch_bytes(source, client).await.with_context(ctx)?;
    debug!(source = %source, bytes = bytes.len(), "Fetched dataset document");

    let dataset = Dataset::from_json_slice(&bytes)
        .map_err(|e| DataError::invalid_document(source.to_string(), &e))
        .with_context(ctx)?;

    info!(
        source = %source,
        records = dataset.len(),
        segmented = dataset.summary.is_segmented(),
        "Loaded dataset"
    );
    Ok(dataset)
}

async fn fetch_bytes<C>(source: &DataSource, client: &C) -> Result<Vec<u8>, DataError>
where
    C: HttpClient + ?Sized,
{
    match source {
        DataSource::File(path) => tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataError::FileNotFound { path: path.clone() },
            _ => DataError::FileRead {
                path: path.clone(),
                message: e.to_string(),
            },
        }),
        DataSource::Url(url) => {
            let mut headers = Headers::new();
            headers.insert("Accept".to_string(), "application/json".to_string());

            let response = client
                .get(url, &headers)
                .await
                .map_err(|e| DataError::from_http(url, e))?;

            if !response.is_success() {
                return Err(DataError::HttpStatus {
                    url: url.clone(),
                    status: response.status,
                });
            }
            Ok(response.body.to_vec())
        }
    }
}
