//! Environment configuration layered under the command-line flags.
//!
//! These tests mutate process environment variables, so they run serially.

use std::path::PathBuf;

use clap::Parser;
use serial_test::serial;

use reelscope::cli::CliArgs;
use reelscope::loader::DataSource;
use reelscope::models::SortField;
use reelscope::pagination::PageSize;
use reelscope::query::SortOrder;
use reelscope::startup::config::{ENV_DATA, ENV_ORDER, ENV_PAGE_SIZE, ENV_SORT, ENV_VIEW};
use reelscope::startup::DashboardConfig;
use reelscope::state::ViewMode;

const ALL_VARS: [&str; 5] = [ENV_DATA, ENV_PAGE_SIZE, ENV_VIEW, ENV_SORT, ENV_ORDER];

/// Sets variables for the duration of a test and removes them afterwards.
struct EnvGuard;

impl EnvGuard {
    fn set(vars: &[(&str, &str)]) -> Self {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_from_env_without_variables() {
    let _guard = EnvGuard::set(&[]);
    let config = DashboardConfig::from_env();

    assert_eq!(config.data, DataSource::File(PathBuf::from("data.json")));
    assert_eq!(config.page_size, PageSize::Fixed(20));
    assert_eq!(config.view_mode, ViewMode::Card);
    assert_eq!(config.sort_field, None);
    assert_eq!(config.sort_order, SortOrder::Desc);
}

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    let _guard = EnvGuard::set(&[
        (ENV_DATA, "https://cdn.example.com/creators.json"),
        (ENV_PAGE_SIZE, "50"),
        (ENV_VIEW, "table"),
        (ENV_SORT, "engagement_rate"),
        (ENV_ORDER, "asc"),
    ]);
    let config = DashboardConfig::from_env();

    assert_eq!(
        config.data,
        DataSource::Url("https://cdn.example.com/creators.json".to_string())
    );
    assert_eq!(config.page_size, PageSize::Fixed(50));
    assert_eq!(config.view_mode, ViewMode::Table);
    assert_eq!(config.sort_field, Some(SortField::EngagementRate));
    assert_eq!(config.sort_order, SortOrder::Asc);
}

#[test]
#[serial]
fn test_invalid_variables_fall_back_to_defaults() {
    let _guard = EnvGuard::set(&[
        (ENV_PAGE_SIZE, "0"),
        (ENV_VIEW, "grid"),
        (ENV_SORT, "popularity"),
        (ENV_ORDER, "sideways"),
    ]);
    let config = DashboardConfig::from_env();

    assert_eq!(config.page_size, PageSize::Fixed(20));
    assert_eq!(config.view_mode, ViewMode::Card);
    assert_eq!(config.sort_field, None);
    assert_eq!(config.sort_order, SortOrder::Desc);
}

#[test]
#[serial]
fn test_flags_override_environment() {
    let _guard = EnvGuard::set(&[(ENV_VIEW, "table"), (ENV_PAGE_SIZE, "all")]);
    let args = CliArgs::try_parse_from(["reelscope", "--view", "card", "--data", "local.json"]).unwrap();
    let config = args.apply(DashboardConfig::from_env());

    assert_eq!(config.view_mode, ViewMode::Card);
    assert_eq!(config.page_size, PageSize::All);
    assert_eq!(config.data, DataSource::File(PathBuf::from("local.json")));
}
