//! The loaded dataset document.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::{Record, Summary};

/// `{ summary, data }` as written by the converter.
///
/// Loaded once and never mutated afterwards. Every other component refers to
/// records by their index into [`Dataset::records`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub summary: Summary,
    #[serde(rename = "data")]
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(summary: Summary, records: Vec<Record>) -> Self {
        Self { summary, records }
    }

    /// Parse a dataset document. A document without a `data` array is rejected.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct, non-empty `follower_tier` values in sorted order.
    pub fn tiers(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.follower_tier.as_deref())
            .filter(|t| !t.trim().is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Ids that appear on more than one record, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dupes = Vec::new();
        for record in &self.records {
            if !seen.insert(record.id) && reported.insert(record.id) {
                dupes.push(record.id);
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let doc = br#"{
            "summary": {"total_influencers": 2, "total_views": 30, "total_followers": 5,
                        "avg_engagement_rate": 0.1, "avg_cpm": 2.0},
            "data": [
                {"id": 1, "author_name": "a", "follower_tier": "Micro"},
                {"id": 2, "author_name": "b", "follower_tier": "Mega"}
            ]
        }"#;
        let dataset = Dataset::from_json_slice(doc).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.summary.all.total_influencers, 2.0);
        assert_eq!(dataset.get(1).map(|r| r.id), Some(2));
    }

    #[test]
    fn test_missing_data_is_an_error() {
        assert!(Dataset::from_json_slice(br#"{"summary": {}}"#).is_err());
        assert!(Dataset::from_json_slice(b"not json").is_err());
    }

    #[test]
    fn test_missing_summary_defaults() {
        let dataset = Dataset::from_json_slice(br#"{"data": []}"#).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.summary, Summary::default());
    }

    #[test]
    fn test_tiers_are_sorted_and_distinct() {
        let mut records = Vec::new();
        for (id, tier) in [(1, Some("Mid")), (2, Some("Micro")), (3, None), (4, Some("Mid")), (5, Some(""))] {
            let mut r = Record::new(id);
            r.follower_tier = tier.map(str::to_string);
            records.push(r);
        }
        let dataset = Dataset::new(Summary::default(), records);
        assert_eq!(dataset.tiers(), vec!["Micro".to_string(), "Mid".to_string()]);
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let records = [1, 2, 1, 3, 1, 2].into_iter().map(Record::new).collect();
        let dataset = Dataset::new(Summary::default(), records);
        assert_eq!(dataset.duplicate_ids(), vec![1, 2]);
    }
}
