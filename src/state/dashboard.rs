//! Dashboard state machine
//!
//! A reducer over the dashboard's query, pagination and view-mode settings.
//! The filtered view is recomputed eagerly whenever the query or the dataset
//! changes, and every recomputation puts the cursor back on page 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{Dataset, Record, SortField};
use crate::pagination::{PageSize, PageWindow, PaginationState};
use crate::query::{self, QueryState};

// ============================================================================
// ViewMode
// ============================================================================

/// How the current page is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Card => ViewMode::Table,
            ViewMode::Table => ViewMode::Card,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Card => "card",
            ViewMode::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" | "cards" => Ok(ViewMode::Card),
            "table" => Ok(ViewMode::Table),
            other => Err(format!("invalid view mode '{other}': expected 'card' or 'table'")),
        }
    }
}

// ============================================================================
// LoadStatus
// ============================================================================

/// Outcome of the one-time dataset load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

// ============================================================================
// Action / Transition
// ============================================================================

/// Every user-facing state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SubmitSearch(String),
    /// Reset search, tier and sort field. The sort direction is kept.
    ClearSearch,
    SelectTier(Option<String>),
    SelectSortField(Option<SortField>),
    ToggleSortOrder,
    /// Table header click.
    SortByColumn(SortField),
    SetPageSize(PageSize),
    GoToPage(usize),
    PrevPage,
    NextPage,
    SetViewMode(ViewMode),
    ToggleViewMode,
    DatasetLoaded(Box<Dataset>),
    DatasetFailed(String),
}

/// What changed as the result of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The filtered view was recomputed and the cursor reset to page 1.
    Recomputed,
    /// A query setting changed without affecting the filtered view.
    QueryUpdated,
    /// Only the visible slice changed.
    PageChanged,
    /// Only the presentation changed.
    ViewModeChanged,
    Unchanged,
}

impl Transition {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

// ============================================================================
// DashboardState
// ============================================================================

/// Owner of the dataset and everything derived from it.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    dataset: Dataset,
    tiers: Vec<String>,
    query: QueryState,
    pagination: PaginationState,
    view_mode: ViewMode,
    view: Vec<usize>,
    status: LoadStatus,
}

impl DashboardState {
    /// An empty, loading dashboard with the given initial settings.
    pub fn new(query: QueryState, page_size: PageSize, view_mode: ViewMode) -> Self {
        Self {
            query,
            pagination: PaginationState::new(page_size),
            view_mode,
            ..Self::default()
        }
    }

    /// A ready dashboard over `dataset`, mostly for tests and headless use.
    pub fn with_dataset(dataset: Dataset) -> Self {
        let mut state = Self::default();
        state.apply(Action::DatasetLoaded(Box::new(dataset)));
        state
    }

    /// Apply one action and report what changed.
    pub fn apply(&mut self, action: Action) -> Transition {
        let label = action_label(&action);
        let transition = self.reduce(action);
        debug!(
            action = label,
            ?transition,
            page = self.pagination.current_page,
            filtered = self.view.len(),
            "Applied dashboard action"
        );
        transition
    }

    fn reduce(&mut self, action: Action) -> Transition {
        match action {
            Action::SubmitSearch(text) => {
                self.query.search = text;
                self.recompute()
            }
            Action::ClearSearch => {
                self.query.search.clear();
                self.query.tier = None;
                self.query.sort_field = None;
                self.recompute()
            }
            Action::SelectTier(tier) => {
                self.query.tier = tier.filter(|t| !t.is_empty());
                self.recompute()
            }
            Action::SelectSortField(field) => {
                self.query.sort_field = field;
                self.recompute()
            }
            Action::ToggleSortOrder => {
                self.query.sort_order = self.query.sort_order.toggled();
                if self.query.sort_field.is_some() {
                    self.recompute()
                } else {
                    Transition::QueryUpdated
                }
            }
            Action::SortByColumn(field) => {
                self.query.sort_field = Some(field);
                self.recompute()
            }
            Action::SetPageSize(size) => {
                self.pagination.page_size = size;
                self.pagination.reset();
                Transition::PageChanged
            }
            Action::GoToPage(page) => {
                let target = page.clamp(1, self.window().total_pages);
                self.move_to(target)
            }
            Action::PrevPage => {
                let window = self.window();
                if window.has_prev() {
                    self.move_to(window.current_page - 1)
                } else {
                    Transition::Unchanged
                }
            }
            Action::NextPage => {
                let window = self.window();
                if window.has_next() {
                    self.move_to(window.current_page + 1)
                } else {
                    Transition::Unchanged
                }
            }
            Action::SetViewMode(mode) => self.set_view_mode(mode),
            Action::ToggleViewMode => self.set_view_mode(self.view_mode.toggled()),
            Action::DatasetLoaded(dataset) => {
                self.install(*dataset);
                self.status = LoadStatus::Ready;
                self.recompute()
            }
            Action::DatasetFailed(message) => {
                self.install(Dataset::default());
                self.status = LoadStatus::Failed(message);
                self.recompute()
            }
        }
    }

    fn install(&mut self, dataset: Dataset) {
        let duplicates = dataset.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                count = duplicates.len(),
                ids = ?duplicates,
                "Dataset contains duplicate record ids; lookups use the first match"
            );
        }
        self.tiers = dataset.tiers();
        info!(
            records = dataset.len(),
            tiers = self.tiers.len(),
            "Dataset installed"
        );
        self.dataset = dataset;
    }

    fn recompute(&mut self) -> Transition {
        self.view = query::apply(&self.dataset, &self.query);
        self.pagination.reset();
        Transition::Recomputed
    }

    fn move_to(&mut self, page: usize) -> Transition {
        let current = self.window().current_page;
        self.pagination.current_page = page;
        if page == current {
            Transition::Unchanged
        } else {
            Transition::PageChanged
        }
    }

    fn set_view_mode(&mut self, mode: ViewMode) -> Transition {
        if self.view_mode == mode {
            return Transition::Unchanged;
        }
        self.view_mode = mode;
        Transition::ViewModeChanged
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Distinct tiers present in the dataset, sorted.
    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    /// The filtered view as indices into the dataset.
    pub fn filtered_view(&self) -> &[usize] {
        &self.view
    }

    /// The filtered view as records.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.view.iter().filter_map(|&idx| self.dataset.get(idx))
    }

    /// Current page placement, with the page number clamped into range.
    pub fn window(&self) -> PageWindow {
        PageWindow::compute(self.view.len(), &self.pagination)
    }

    /// Records on the current page, in view order.
    pub fn page_records(&self) -> Vec<&Record> {
        self.window()
            .slice(&self.view)
            .iter()
            .filter_map(|&idx| self.dataset.get(idx))
            .collect()
    }

    /// Look up a record by id within the filtered view only.
    ///
    /// Records hidden by the current filters are not found.
    pub fn find_in_view(&self, id: i64) -> Option<&Record> {
        self.filtered_records().find(|record| record.id == id)
    }
}

fn action_label(action: &Action) -> &'static str {
    match action {
        Action::SubmitSearch(_) => "submit_search",
        Action::ClearSearch => "clear_search",
        Action::SelectTier(_) => "select_tier",
        Action::SelectSortField(_) => "select_sort_field",
        Action::ToggleSortOrder => "toggle_sort_order",
        Action::SortByColumn(_) => "sort_by_column",
        Action::SetPageSize(_) => "set_page_size",
        Action::GoToPage(_) => "go_to_page",
        Action::PrevPage => "prev_page",
        Action::NextPage => "next_page",
        Action::SetViewMode(_) => "set_view_mode",
        Action::ToggleViewMode => "toggle_view_mode",
        Action::DatasetLoaded(_) => "dataset_loaded",
        Action::DatasetFailed(_) => "dataset_failed",
    }
}
