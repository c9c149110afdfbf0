//! Creator record as emitted by the dataset converter.

use serde::{Deserialize, Serialize};

use super::field::{FieldValue, SortField};
use super::{deserialize_id, deserialize_lenient_number, deserialize_lenient_text, deserialize_sortable_text};

/// One creator/video entry.
///
/// Every field except `id` is optional. Numeric fields come in pairs with a
/// pre-formatted display string (`follower_count` / `follower_count_formatted`);
/// the numeric value drives sorting, the string is display-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub original_id: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_sortable_text", skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sortable_text", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub profile_intro: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub video_caption: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sortable_text", skip_serializing_if = "Option::is_none")]
    pub follower_tier: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub influencer_type: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub view_ratio: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub comment_conversion: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub follower_quality: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub estimated_cpm: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub cost_efficiency: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub follower_count_formatted: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub upload_count: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub likes_count_formatted: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub shares_count: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub shares_count_formatted: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub comments_count_formatted: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub views_count: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub views_count_formatted: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub music_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub music_artist: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sortable_text", skip_serializing_if = "Option::is_none")]
    pub upload_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text", skip_serializing_if = "Option::is_none")]
    pub profile_entry: Option<String>,
}

impl Record {
    /// Create a record with just an id. Handy for tests and fixtures.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// The value this record holds for a sort field, if any.
    pub fn field_value(&self, field: SortField) -> Option<FieldValue<'_>> {
        fn number(v: Option<f64>) -> Option<FieldValue<'static>> {
            v.map(FieldValue::Number)
        }
        fn text(v: &Option<String>) -> Option<FieldValue<'_>> {
            v.as_deref().map(FieldValue::Text)
        }

        match field {
            SortField::FollowerCount => number(self.follower_count),
            SortField::ViewsCount => number(self.views_count),
            SortField::LikesCount => number(self.likes_count),
            SortField::CommentsCount => number(self.comments_count),
            SortField::SharesCount => number(self.shares_count),
            SortField::EngagementRate => number(self.engagement_rate),
            SortField::EstimatedCpm => number(self.estimated_cpm),
            SortField::CostEfficiency => number(self.cost_efficiency),
            SortField::FollowerQuality => number(self.follower_quality),
            SortField::ViewRatio => number(self.view_ratio),
            SortField::UploadCount => number(self.upload_count),
            SortField::VideoDuration => number(self.video_duration),
            SortField::Id => Some(FieldValue::Number(self.id as f64)),
            SortField::AuthorName => text(&self.author_name),
            SortField::AccountId => text(&self.account_id),
            SortField::FollowerTier => text(&self.follower_tier),
            SortField::UploadTime => text(&self.upload_time),
        }
    }

    /// Text fields covered by free-text search.
    pub fn searchable_text(&self) -> [Option<&str>; 3] {
        [
            self.author_name.as_deref(),
            self.account_id.as_deref(),
            self.video_caption.as_deref(),
        ]
    }

    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_converter_record() {
        let record: Record = serde_json::from_value(json!({
            "id": 3,
            "original_id": 12.0,
            "author_name": "Mina",
            "account_id": "mina.daily",
            "video_caption": "Morning routine #ABC",
            "follower_count": 152000,
            "follower_count_formatted": "152.0K",
            "views_count": 1200000.0,
            "engagement_rate": 0.0412,
            "estimated_cpm": 12.5,
            "follower_tier": "Mid",
            "email": "mina@example.com",
            "video_url": "https://www.tiktok.com/@mina.daily/video/7312345678901234567",
            "influencer_type": "regular"
        }))
        .unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.author_name.as_deref(), Some("Mina"));
        assert_eq!(record.follower_count, Some(152000.0));
        assert_eq!(record.views_count_formatted, None);
        assert!(record.has_email());
    }

    #[test]
    fn test_deserialize_tolerates_malformed_fields() {
        let record: Record = serde_json::from_value(json!({
            "id": "9",
            "account_id": 123456,
            "views_count": "N/A",
            "likes_count": "420",
            "email": ""
        }))
        .unwrap();

        assert_eq!(record.id, 9);
        assert_eq!(record.account_id.as_deref(), Some("123456"));
        assert_eq!(record.views_count, None);
        assert_eq!(record.likes_count, Some(420.0));
        assert!(!record.has_email());
    }

    #[test]
    fn test_field_value_missing_and_present() {
        let mut record = Record::new(1);
        assert_eq!(record.field_value(SortField::ViewsCount), None);
        assert_eq!(record.field_value(SortField::Id), Some(FieldValue::Number(1.0)));

        record.views_count = Some(10.0);
        record.author_name = Some("Zed".to_string());
        assert_eq!(
            record.field_value(SortField::ViewsCount),
            Some(FieldValue::Number(10.0))
        );
        assert_eq!(
            record.field_value(SortField::AuthorName),
            Some(FieldValue::Text("Zed"))
        );
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let record = Record::new(5);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": 5}));
    }

    #[test]
    fn test_blank_sortable_text_is_a_value() {
        let record: Record = serde_json::from_value(json!({
            "id": 8,
            "author_name": "",
            "account_id": null,
            "video_caption": ""
        }))
        .unwrap();

        assert_eq!(record.field_value(SortField::AuthorName), Some(FieldValue::Text("")));
        assert_eq!(record.field_value(SortField::AccountId), None);
        assert_eq!(record.video_caption, None);
    }
}
