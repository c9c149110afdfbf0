use serde::Serialize;

use crate::models::{Record, SummaryStats};
use crate::pagination::{PageButton, PageSize, RangeLabel};
use crate::query::QueryState;
use crate::state::{DashboardState, LoadStatus, ViewMode};

/// Pagination metadata for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: PageSize,
    pub buttons: Vec<PageButton>,
    pub range: RangeLabel,
    pub range_text: String,
    pub has_prev: bool,
    pub has_next: bool,
    /// False when there is a single page and the bar is hidden.
    pub visible: bool,
}

/// Everything a renderer needs for one frame.
///
/// Borrows from the [`DashboardState`] it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct RenderModel<'a> {
    pub status: &'a LoadStatus,
    pub view_mode: ViewMode,
    pub query: &'a QueryState,
    pub summary: &'a SummaryStats,
    pub tiers: &'a [String],
    pub dataset_count: usize,
    pub filtered_count: usize,
    pub pagination: PaginationModel,
    pub records: Vec<&'a Record>,
}

impl<'a> RenderModel<'a> {
    pub fn from_state(state: &'a DashboardState) -> Self {
        let window = state.window();
        let range = window.range_label();

        Self {
            status: state.status(),
            view_mode: state.view_mode(),
            query: state.query(),
            summary: state.dataset().summary.headline(),
            tiers: state.tiers(),
            dataset_count: state.dataset().len(),
            filtered_count: state.filtered_view().len(),
            pagination: PaginationModel {
                current_page: window.current_page,
                total_pages: window.total_pages,
                page_size: state.pagination().page_size,
                buttons: window.buttons(),
                range,
                range_text: range.to_string(),
                has_prev: window.has_prev(),
                has_next: window.has_next(),
                visible: window.total_pages > 1,
            },
            records: state.page_records(),
        }
    }

    /// Record at `row` of the current page.
    pub fn record_at(&self, row: usize) -> Option<&'a Record> {
        self.records.get(row).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DashboardState {
    pub fn render_model(&self) -> RenderModel<'_> {
        RenderModel::from_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, Summary};
    use crate::state::Action;

    fn state(n: i64) -> DashboardState {
        let records = (1..=n).map(Record::new).collect();
        DashboardState::with_dataset(Dataset::new(Summary::default(), records))
    }

    #[test]
    fn test_model_reflects_current_page() {
        let mut state = state(45);
        state.apply(Action::GoToPage(2));
        let model = state.render_model();

        assert_eq!(model.records.len(), 20);
        assert_eq!(model.record_at(0).map(|r| r.id), Some(21));
        assert_eq!(model.pagination.range_text, "Showing 21-40 / 45");
        assert!(model.pagination.has_prev && model.pagination.has_next);
        assert!(model.pagination.visible);
    }

    #[test]
    fn test_single_page_hides_bar() {
        let state = state(3);
        let model = state.render_model();
        assert!(!model.pagination.visible);
        assert_eq!(model.pagination.buttons.len(), 1);
    }

    #[test]
    fn test_model_serializes() {
        let state = state(2);
        let json = serde_json::to_value(state.render_model()).unwrap();
        assert_eq!(json["status"]["state"], "ready");
        assert_eq!(json["view_mode"], "card");
        assert_eq!(json["pagination"]["page_size"], 20);
        assert_eq!(json["records"][1]["id"], 2);
        assert_eq!(json["pagination"]["buttons"][0]["kind"], "page");
    }
}
