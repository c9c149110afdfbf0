//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which component receives keystrokes
//! - [`Overlay`] - Detail and video modals
//! - [`Notice`] - Footer toasts
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Notice, NoticeLevel, Overlay, NOTICE_TTL};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::adapters::{SystemBrowser, SystemClipboard};
use crate::loader::load_dataset;
use crate::startup::DashboardConfig;
use crate::state::{Action, DashboardState, Transition};
use crate::traits::{BrowserLauncher, ClipboardProvider, HttpClient};
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    /// Query, pagination and view settings plus the loaded dataset
    pub dashboard: DashboardState,
    /// Settings the dashboard was started with
    pub config: DashboardConfig,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    pub focus: Focus,
    /// Search box contents while it is being edited; applied on submit
    pub search_draft: String,
    /// Selected row within the current page
    pub selected: usize,
    pub overlay: Option<Overlay>,
    pub notice: Option<Notice>,
    /// Receiver for async messages (dataset load results)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Clickable regions from the last rendered frame
    pub hit_areas: HitAreaRegistry,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    clipboard: Box<dyn ClipboardProvider>,
    browser: Box<dyn BrowserLauncher>,
}

impl App {
    /// Create an app using the system clipboard and browser.
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_desktop(
            config,
            Box::new(SystemClipboard::new()),
            Box::new(SystemBrowser),
        )
    }

    /// Create an app with injected desktop integrations.
    pub fn with_desktop(
        config: DashboardConfig,
        clipboard: Box<dyn ClipboardProvider>,
        browser: Box<dyn BrowserLauncher>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            dashboard: config.initial_state(),
            search_draft: config.search.clone(),
            config,
            should_quit: false,
            focus: Focus::default(),
            selected: 0,
            overlay: None,
            notice: None,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            hit_areas: HitAreaRegistry::new(),
            terminal_width: 80,  // Default, will be updated on first render
            terminal_height: 24, // Default, will be updated on first render
            needs_redraw: true,
            clipboard,
            browser,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Apply a dashboard action, keeping the selection in step with the page.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = self.dashboard.apply(action);
        if matches!(transition, Transition::Recomputed | Transition::PageChanged) {
            self.selected = 0;
        }
        if transition.needs_redraw() {
            self.mark_dirty();
        }
        transition
    }

    /// Spawn the one-time dataset fetch. The result arrives as an [`AppMessage`].
    pub fn start_loading(&self, client: Arc<dyn HttpClient>) {
        let tx = self.message_tx.clone();
        let source = self.config.data.clone();

        tokio::spawn(async move {
            info!(source = %source, "Loading dataset");
            let message = match load_dataset(&source, client.as_ref()).await {
                Ok(dataset) => AppMessage::DatasetLoaded(Box::new(dataset)),
                Err(e) => {
                    error!(error = %e, code = e.error_code(), "Dataset load failed");
                    AppMessage::DatasetLoadFailed {
                        message: e.user_message(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    pub(crate) fn clipboard(&mut self) -> &mut dyn ClipboardProvider {
        self.clipboard.as_mut()
    }

    pub(crate) fn browser(&mut self) -> &mut dyn BrowserLauncher {
        self.browser.as_mut()
    }
}
