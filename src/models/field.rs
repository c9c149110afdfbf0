//! Sortable record fields.
//!
//! [`SortField`] is the closed set of record fields the dashboard can order by.
//! Each field resolves to a [`FieldValue`] on a record, or to nothing when the
//! record does not carry it.

use serde::{Deserialize, Serialize};

/// Whether a field compares numerically or as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Text,
}

/// A borrowed field value extracted from a record for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// Record fields that can drive the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    FollowerCount,
    ViewsCount,
    LikesCount,
    CommentsCount,
    SharesCount,
    EngagementRate,
    EstimatedCpm,
    CostEfficiency,
    FollowerQuality,
    ViewRatio,
    UploadCount,
    VideoDuration,
    Id,
    AuthorName,
    AccountId,
    FollowerTier,
    UploadTime,
}

impl SortField {
    /// Every sortable field, in the order the sort selector cycles through them.
    pub const ALL: [SortField; 17] = [
        SortField::FollowerCount,
        SortField::ViewsCount,
        SortField::LikesCount,
        SortField::CommentsCount,
        SortField::SharesCount,
        SortField::EngagementRate,
        SortField::EstimatedCpm,
        SortField::CostEfficiency,
        SortField::FollowerQuality,
        SortField::ViewRatio,
        SortField::UploadCount,
        SortField::VideoDuration,
        SortField::Id,
        SortField::AuthorName,
        SortField::AccountId,
        SortField::FollowerTier,
        SortField::UploadTime,
    ];

    /// The dataset key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            SortField::FollowerCount => "follower_count",
            SortField::ViewsCount => "views_count",
            SortField::LikesCount => "likes_count",
            SortField::CommentsCount => "comments_count",
            SortField::SharesCount => "shares_count",
            SortField::EngagementRate => "engagement_rate",
            SortField::EstimatedCpm => "estimated_cpm",
            SortField::CostEfficiency => "cost_efficiency",
            SortField::FollowerQuality => "follower_quality",
            SortField::ViewRatio => "view_ratio",
            SortField::UploadCount => "upload_count",
            SortField::VideoDuration => "video_duration",
            SortField::Id => "id",
            SortField::AuthorName => "author_name",
            SortField::AccountId => "account_id",
            SortField::FollowerTier => "follower_tier",
            SortField::UploadTime => "upload_time",
        }
    }

    /// Resolve a dataset key. Unknown keys resolve to `None`, which means "no sort".
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }

    /// Short label for selectors and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::FollowerCount => "Followers",
            SortField::ViewsCount => "Views",
            SortField::LikesCount => "Likes",
            SortField::CommentsCount => "Comments",
            SortField::SharesCount => "Shares",
            SortField::EngagementRate => "Engagement",
            SortField::EstimatedCpm => "CPM",
            SortField::CostEfficiency => "Cost efficiency",
            SortField::FollowerQuality => "Follower quality",
            SortField::ViewRatio => "View ratio",
            SortField::UploadCount => "Uploads",
            SortField::VideoDuration => "Duration",
            SortField::Id => "ID",
            SortField::AuthorName => "Name",
            SortField::AccountId => "Account",
            SortField::FollowerTier => "Tier",
            SortField::UploadTime => "Uploaded",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SortField::AuthorName
            | SortField::AccountId
            | SortField::FollowerTier
            | SortField::UploadTime => FieldKind::Text,
            _ => FieldKind::Numeric,
        }
    }

    /// Next field in selector order, wrapping to `None` after the last one.
    pub fn cycle_next(current: Option<SortField>) -> Option<SortField> {
        match current {
            None => Some(Self::ALL[0]),
            Some(field) => {
                let idx = Self::ALL.iter().position(|f| *f == field).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }

    /// Previous field in selector order, wrapping to `None` before the first one.
    pub fn cycle_prev(current: Option<SortField>) -> Option<SortField> {
        match current {
            None => Self::ALL.last().copied(),
            Some(field) => {
                let idx = Self::ALL.iter().position(|f| *f == field).unwrap_or(0);
                idx.checked_sub(1).map(|i| Self::ALL[i])
            }
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
