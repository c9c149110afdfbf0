//! Command-line arguments.
//!
//! Flags override the `REELSCOPE_*` environment variables, which override the
//! built-in defaults.

use clap::Parser;
use tracing::warn;

use crate::loader::DataSource;
use crate::models::SortField;
use crate::pagination::PageSize;
use crate::query::SortOrder;
use crate::startup::DashboardConfig;
use crate::state::ViewMode;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "reelscope",
    version,
    about = "Terminal dashboard for browsing influencer and short-video records"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "PATH|URL",
        help_heading = "DATA",
        help = "Dataset to load: a local JSON file or an http(s) URL [default: data.json]"
    )]
    pub data: Option<String>,

    #[arg(
        long,
        help_heading = "OUTPUT",
        help = "Print the first view as JSON instead of starting the dashboard"
    )]
    pub json: bool,

    #[arg(
        long,
        value_name = "TEXT",
        help_heading = "QUERY",
        help = "Initial search over name, account, region and title"
    )]
    pub search: Option<String>,

    #[arg(
        long,
        value_name = "TIER",
        help_heading = "QUERY",
        help = "Only show records in this follower tier"
    )]
    pub tier: Option<String>,

    #[arg(
        long,
        value_name = "FIELD",
        help_heading = "QUERY",
        help = "Sort field key, e.g. views_count or estimated_cpm (unknown keys disable sorting)"
    )]
    pub sort: Option<String>,

    #[arg(
        long,
        value_name = "asc|desc",
        value_parser = parse_sort_order,
        help_heading = "QUERY",
        help = "Sort direction [default: desc]"
    )]
    pub order: Option<SortOrder>,

    #[arg(
        long = "page-size",
        value_name = "N|all",
        help_heading = "VIEW",
        help = "Records per page, or 'all' [default: 20]"
    )]
    pub page_size: Option<PageSize>,

    #[arg(
        long,
        value_name = "N",
        value_parser = parse_page,
        help_heading = "VIEW",
        help = "Page to open once the dataset has loaded"
    )]
    pub page: Option<usize>,

    #[arg(
        long,
        value_name = "card|table",
        help_heading = "VIEW",
        help = "Initial view mode [default: card]"
    )]
    pub view: Option<ViewMode>,
}

fn parse_sort_order(raw: &str) -> Result<SortOrder, String> {
    SortOrder::parse(raw).ok_or_else(|| format!("expected 'asc' or 'desc', got '{raw}'"))
}

fn parse_page(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(format!("expected a page number of at least 1, got '{raw}'")),
    }
}

impl CliArgs {
    /// Layer the flags that were given on top of `config`.
    pub fn apply(&self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(data) = &self.data {
            config = config.with_data(DataSource::parse(data));
        }
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        }
        if let Some(mode) = self.view {
            config = config.with_view_mode(mode);
        }
        if let Some(key) = &self.sort {
            let field = SortField::from_key(key);
            if field.is_none() && !key.trim().is_empty() && key.trim() != "none" {
                warn!(value = %key, "Unknown sort field, records keep their dataset order");
            }
            config = config.with_sort_field(field);
        }
        if let Some(order) = self.order {
            config = config.with_sort_order(order);
        }
        if let Some(search) = &self.search {
            config = config.with_search(search.clone());
        }
        if let Some(tier) = &self.tier {
            config = config.with_tier(Some(tier.clone()));
        }
        if self.page.is_some() {
            config = config.with_initial_page(self.page);
        }
        config
    }
}
