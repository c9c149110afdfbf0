//! Input handling module for keyboard and command processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to the handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use reelscope::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::app::{App, Focus, Overlay};

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = match &self.overlay {
            None => ModalType::None,
            Some(Overlay::Detail { .. }) => ModalType::Detail,
            Some(Overlay::Video { .. }) => ModalType::Video,
        };

        InputContext {
            modal,
            search_focused: self.focus == Focus::Search,
            view_mode: self.dashboard.view_mode(),
        }
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => {
                self.should_quit = true;
                true
            }
            Command::Noop => true,
            ref cmd => {
                handlers::handle_search_command(self, cmd)
                    || handlers::handle_query_command(self, cmd)
                    || handlers::handle_pagination_command(self, cmd)
                    || handlers::handle_record_command(self, cmd)
            }
        }
    }

    /// Dispatch a key event through `registry` and execute the result.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: KeyEvent) -> bool {
        let context = self.build_input_context();
        match registry.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    /// Append pasted text to the search box. Ignored unless search has focus.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        if self.focus != Focus::Search {
            return false;
        }
        // The search box is a single line
        self.search_draft
            .extend(text.chars().filter(|c| !c.is_control()));
        self.mark_dirty();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::adapters::mock::{MockBrowser, MockClipboard};
    use crate::models::{Dataset, Record, Summary};
    use crate::startup::DashboardConfig;
    use crate::state::Action;

    fn create_test_app() -> App {
        let mut app = App::with_desktop(
            DashboardConfig::default(),
            Box::new(MockClipboard::new()),
            Box::new(MockBrowser::new()),
        );
        let records = (1..=50)
            .map(|id| {
                let mut r = Record::new(id);
                r.author_name = Some(format!("creator {id}"));
                r
            })
            .collect();
        app.dispatch(Action::DatasetLoaded(Box::new(Dataset::new(
            Summary::default(),
            records,
        ))));
        app
    }

    fn press(app: &mut App, registry: &CommandRegistry, code: KeyCode) -> bool {
        app.handle_key(registry, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_build_input_context_default() {
        let app = create_test_app();
        let ctx = app.build_input_context();
        assert_eq!(ctx.modal, ModalType::None);
        assert!(!ctx.search_focused);
    }

    #[test]
    fn test_build_input_context_with_overlay() {
        let mut app = create_test_app();
        app.overlay = Some(Overlay::Detail { record_id: 1 });
        assert_eq!(app.build_input_context().modal, ModalType::Detail);
    }

    #[test]
    fn test_execute_command_quit() {
        let mut app = create_test_app();
        assert!(app.execute_command(Command::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_search_box() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();

        press(&mut app, &registry, KeyCode::Char('/'));
        press(&mut app, &registry, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.search_draft, "q");
    }

    #[test]
    fn test_full_key_flow() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();

        press(&mut app, &registry, KeyCode::Char('/'));
        for c in "creator 4".chars() {
            press(&mut app, &registry, KeyCode::Char(c));
        }
        press(&mut app, &registry, KeyCode::Enter);
        // "creator 4" and "creator 40".."creator 49"
        assert_eq!(app.dashboard.filtered_view().len(), 11);

        press(&mut app, &registry, KeyCode::Down);
        press(&mut app, &registry, KeyCode::Enter);
        assert_eq!(app.overlay, Some(Overlay::Detail { record_id: 40 }));

        // Arrow keys are swallowed by the modal.
        press(&mut app, &registry, KeyCode::Right);
        assert_eq!(app.dashboard.pagination().current_page, 1);

        press(&mut app, &registry, KeyCode::Esc);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_paste_only_reaches_focused_search() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();
        assert!(!app.handle_paste("creator"));
        assert!(app.search_draft.is_empty());

        press(&mut app, &registry, KeyCode::Char('/'));
        assert!(app.handle_paste("creator\n 7"));
        assert_eq!(app.search_draft, "creator 7");
    }

    #[test]
    fn test_unbound_key_not_handled() {
        let registry = CommandRegistry::new();
        let mut app = create_test_app();
        assert!(!press(&mut app, &registry, KeyCode::F(5)));
    }
}
