//! TikTok video URL handling for the video modal.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::error::UiError;

pub const EMBED_BASE_URL: &str = "https://www.tiktok.com/embed/v2/";
pub const DEFAULT_USERNAME: &str = "user";

static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"video/(\d+)").expect("video id pattern is valid"));

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([^/]+)").expect("username pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoUrlError {
    #[error("record has no video url")]
    Missing,

    #[error("no video id in '{0}'")]
    NoVideoId(String),
}

impl From<VideoUrlError> for UiError {
    fn from(err: VideoUrlError) -> Self {
        let url = match err {
            VideoUrlError::Missing => String::new(),
            VideoUrlError::NoVideoId(url) => url,
        };
        UiError::InvalidVideoUrl { url }
    }
}

/// Everything the video modal shows for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub video_id: String,
    pub username: String,
    pub embed_url: String,
    pub canonical_url: String,
}

impl VideoEmbed {
    pub fn parse(url: &str) -> Result<Self, VideoUrlError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(VideoUrlError::Missing);
        }

        let video_id = VIDEO_ID_RE
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| VideoUrlError::NoVideoId(url.to_string()))?;

        let username = USERNAME_RE
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

        Ok(Self {
            embed_url: format!("{EMBED_BASE_URL}{video_id}"),
            canonical_url: url.to_string(),
            video_id,
            username,
        })
    }

    pub fn from_record_url(url: Option<&str>) -> Result<Self, VideoUrlError> {
        Self::parse(url.unwrap_or_default())
    }
}
