use serde::{Deserialize, Serialize};

use crate::models::SortField;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortOrder::Asc),
            "desc" | "descending" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Current search term, tier filter and sort settings.
///
/// `search` holds the text as the user submitted it; matching uses the
/// trimmed, lowercased form from [`QueryState::search_needle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search: String,
    pub tier: Option<String>,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
}

impl QueryState {
    /// The normalized search needle, or `None` when search is inactive.
    pub fn search_needle(&self) -> Option<String> {
        let needle = self.search.trim().to_lowercase();
        (!needle.is_empty()).then_some(needle)
    }

    /// The tier filter, or `None` when inactive. An empty tier is inactive.
    pub fn active_tier(&self) -> Option<&str> {
        self.tier.as_deref().filter(|t| !t.is_empty())
    }

    pub fn has_filters(&self) -> bool {
        self.search_needle().is_some() || self.active_tier().is_some()
    }
}
