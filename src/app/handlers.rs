//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage, Notice, NoticeLevel};
use crate::state::Action;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::DatasetLoaded(dataset) => {
                self.dispatch(Action::DatasetLoaded(dataset));
                for action in self.config.post_load_actions() {
                    debug!(?action, "Replaying startup action");
                    self.dispatch(action);
                }
            }
            AppMessage::DatasetLoadFailed { message } => {
                self.dispatch(Action::DatasetFailed(message.clone()));
                self.notice = Some(Notice::persistent(message, NoticeLevel::Error));
            }
        }
    }
}
