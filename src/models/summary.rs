//! Pre-computed dataset aggregates.
//!
//! The converter writes either a single flat aggregate object or a segmented
//! object with `all`, `regular` and `sales` aggregates. Both shapes load into
//! [`Summary`]; the header always shows [`Summary::headline`].

use serde::{Deserialize, Deserializer, Serialize};

use super::deserialize_lenient_number;

/// One aggregate block. Values are passed through verbatim, never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default, deserialize_with = "lenient_or_zero")]
    pub total_influencers: f64,
    #[serde(default, deserialize_with = "lenient_or_zero")]
    pub total_views: f64,
    #[serde(default, deserialize_with = "lenient_or_zero")]
    pub total_followers: f64,
    #[serde(default, deserialize_with = "lenient_or_zero")]
    pub avg_engagement_rate: f64,
    #[serde(default, deserialize_with = "lenient_or_zero")]
    pub avg_cpm: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_likes: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_comments: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_shares: Option<f64>,
}

fn lenient_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_number(deserializer)?.unwrap_or(0.0))
}

/// Dataset summary, normalized from either converter shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub all: SummaryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular: Option<SummaryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales: Option<SummaryStats>,
}

impl Summary {
    pub fn flat(stats: SummaryStats) -> Self {
        Self {
            all: stats,
            regular: None,
            sales: None,
        }
    }

    /// The aggregate shown in the dashboard header.
    pub fn headline(&self) -> &SummaryStats {
        &self.all
    }

    pub fn is_segmented(&self) -> bool {
        self.regular.is_some() || self.sales.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SummaryRepr {
    Segmented {
        all: SummaryStats,
        #[serde(default)]
        regular: Option<SummaryStats>,
        #[serde(default)]
        sales: Option<SummaryStats>,
    },
    Flat(SummaryStats),
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = Option::<SummaryRepr>::deserialize(deserializer)?;
        Ok(match repr {
            Some(SummaryRepr::Segmented { all, regular, sales }) => Summary { all, regular, sales },
            Some(SummaryRepr::Flat(stats)) => Summary::flat(stats),
            None => Summary::default(),
        })
    }
}
