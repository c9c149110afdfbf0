//! Headless mode: load once, apply the startup query and print the first view.
//!
//! The output is the serialized [`RenderModel`](crate::view_state::RenderModel),
//! the same structure the terminal renderer draws from.

use tracing::{debug, error};

use crate::loader::load_dataset;
use crate::startup::DashboardConfig;
use crate::state::{Action, DashboardState};
use crate::traits::HttpClient;

/// Load the configured dataset and settle on the view the dashboard would open on.
///
/// A failed load is not fatal: the state ends up empty with a failed status
/// carrying the user-facing message, as the interactive dashboard shows it.
pub async fn headless_state<C>(config: &DashboardConfig, client: &C) -> DashboardState
where
    C: HttpClient + ?Sized,
{
    let mut state = config.initial_state();

    match load_dataset(&config.data, client).await {
        Ok(dataset) => {
            state.apply(Action::DatasetLoaded(Box::new(dataset)));
            for action in config.post_load_actions() {
                debug!(?action, "Replaying startup action");
                state.apply(action);
            }
        }
        Err(e) => {
            error!(error = %e, code = e.error_code(), "Dataset load failed");
            state.apply(Action::DatasetFailed(e.user_message()));
        }
    }
    state
}

/// Pretty-printed JSON for the render model of `state`.
pub fn render_json(state: &DashboardState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&state.render_model())
}
