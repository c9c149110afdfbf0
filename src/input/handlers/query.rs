//! Search box and query command handlers.

use tracing::debug;

use crate::app::{App, Focus};
use crate::input::Command;
use crate::models::SortField;
use crate::state::Action;
use crate::ui::table::column_sort_field;

/// Handles editing of the search box while it has focus.
pub fn handle_search_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::SearchTypeChar(c) => {
            app.search_draft.push(*c);
            true
        }
        Command::SearchBackspace => {
            app.search_draft.pop();
            true
        }
        Command::SearchClearLine => {
            app.search_draft.clear();
            true
        }
        Command::SubmitSearch => {
            app.focus = Focus::Dashboard;
            let term = app.search_draft.clone();
            debug!(term = %term, "Submitting search");
            app.dispatch(Action::SubmitSearch(term));
            true
        }
        Command::CancelSearch => {
            app.focus = Focus::Dashboard;
            app.search_draft = app.dashboard.query().search.clone();
            true
        }
        _ => false,
    }
}

/// Handles filter, sort and view commands from the dashboard.
pub fn handle_query_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::FocusSearch => {
            app.focus = Focus::Search;
            app.search_draft = app.dashboard.query().search.clone();
            true
        }
        Command::ClearFilters => {
            app.search_draft.clear();
            app.dispatch(Action::ClearSearch);
            true
        }
        Command::NextTier | Command::PrevTier => {
            let forward = matches!(cmd, Command::NextTier);
            let tier = cycle_tier(
                app.dashboard.tiers(),
                app.dashboard.query().active_tier(),
                forward,
            );
            app.dispatch(Action::SelectTier(tier));
            true
        }
        Command::NextSortField => {
            let field = SortField::cycle_next(app.dashboard.query().sort_field);
            app.dispatch(Action::SelectSortField(field));
            true
        }
        Command::PrevSortField => {
            let field = SortField::cycle_prev(app.dashboard.query().sort_field);
            app.dispatch(Action::SelectSortField(field));
            true
        }
        Command::ToggleSortOrder => {
            app.dispatch(Action::ToggleSortOrder);
            true
        }
        Command::ToggleViewMode => {
            app.dispatch(Action::ToggleViewMode);
            true
        }
        Command::SortByColumn(column) => match column_sort_field(*column) {
            Some(field) => {
                app.dispatch(Action::SortByColumn(field));
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// Step through "all tiers" followed by each tier in order, wrapping around.
pub fn cycle_tier(tiers: &[String], current: Option<&str>, forward: bool) -> Option<String> {
    if tiers.is_empty() {
        return None;
    }

    // Position 0 is "all tiers"; tier i sits at i + 1.
    let slots = tiers.len() + 1;
    let position = current
        .and_then(|c| tiers.iter().position(|t| t == c))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };

    next.checked_sub(1).map(|i| tiers[i].clone())
}
