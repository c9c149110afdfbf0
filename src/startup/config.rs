//! Dashboard startup configuration.
//!
//! Settings are layered: built-in defaults, then `REELSCOPE_*` environment
//! variables, then command-line flags. Invalid environment values are logged
//! and ignored.

use tracing::warn;

use crate::error::SystemError;
use crate::loader::DataSource;
use crate::models::SortField;
use crate::pagination::PageSize;
use crate::query::{QueryState, SortOrder};
use crate::state::{Action, DashboardState, ViewMode};

pub const ENV_DATA: &str = "REELSCOPE_DATA";
pub const ENV_PAGE_SIZE: &str = "REELSCOPE_PAGE_SIZE";
pub const ENV_VIEW: &str = "REELSCOPE_VIEW";
pub const ENV_SORT: &str = "REELSCOPE_SORT";
pub const ENV_ORDER: &str = "REELSCOPE_ORDER";

/// Initial dashboard settings.
///
/// # Example
///
/// ```ignore
/// use reelscope::startup::DashboardConfig;
///
/// let config = DashboardConfig::from_env()
///     .with_page_size(PageSize::Fixed(50))
///     .with_view_mode(ViewMode::Table);
/// let state = config.initial_state();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data: DataSource,
    pub page_size: PageSize,
    pub view_mode: ViewMode,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    pub search: String,
    pub tier: Option<String>,
    /// Page to jump to once the dataset has loaded.
    pub initial_page: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: DataSource::default(),
            page_size: PageSize::default(),
            view_mode: ViewMode::default(),
            sort_field: None,
            sort_order: SortOrder::default(),
            search: String::new(),
            tier: None,
            initial_page: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: DataSource) -> Self {
        self.data = data;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_sort_field(mut self, field: Option<SortField>) -> Self {
        self.sort_field = field;
        self
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tier(mut self, tier: Option<String>) -> Self {
        self.tier = tier.filter(|t| !t.is_empty());
        self
    }

    pub fn with_initial_page(mut self, page: Option<usize>) -> Self {
        self.initial_page = page;
        self
    }

    /// Defaults overridden by any valid `REELSCOPE_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`DashboardConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(data) = read(ENV_DATA) {
            config.data = DataSource::parse(&data);
        }

        if let Some(raw) = read(ENV_PAGE_SIZE) {
            match raw.parse::<PageSize>() {
                Ok(size) => config.page_size = size,
                Err(e) => ignore_invalid(ENV_PAGE_SIZE, e),
            }
        }

        if let Some(raw) = read(ENV_VIEW) {
            match raw.parse::<ViewMode>() {
                Ok(mode) => config.view_mode = mode,
                Err(e) => ignore_invalid(ENV_VIEW, e),
            }
        }

        if let Some(raw) = read(ENV_SORT) {
            match SortField::from_key(&raw) {
                Some(field) => config.sort_field = Some(field),
                None => ignore_invalid(ENV_SORT, format!("unknown sort field '{raw}'")),
            }
        }

        if let Some(raw) = read(ENV_ORDER) {
            match SortOrder::parse(&raw) {
                Some(order) => config.sort_order = order,
                None => ignore_invalid(ENV_ORDER, format!("expected 'asc' or 'desc', got '{raw}'")),
            }
        }

        config
    }

    pub fn query(&self) -> QueryState {
        QueryState {
            search: self.search.clone(),
            tier: self.tier.clone(),
            sort_field: self.sort_field,
            sort_order: self.sort_order,
        }
    }

    /// A loading dashboard carrying these settings.
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(self.query(), self.page_size, self.view_mode)
    }

    /// Actions to replay once the dataset is installed.
    pub fn post_load_actions(&self) -> Vec<Action> {
        self.initial_page
            .filter(|&page| page > 1)
            .map(Action::GoToPage)
            .into_iter()
            .collect()
    }
}

fn ignore_invalid(variable: &str, message: impl Into<String>) {
    let err = SystemError::EnvironmentError {
        variable: variable.to_string(),
        message: message.into(),
    };
    warn!(code = err.error_code(), error = %err, "Ignoring invalid value");
}
