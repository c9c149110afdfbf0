//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority order:
/// 1. Ctrl+C always quits
/// 2. The search box, when focused, takes every other key
/// 3. An open modal takes every other key
/// 4. Dashboard bindings
/// 5. Digits 1-9 sort by table column in table view
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Map a key event to a command, or `None` if the key is unbound.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::from_event(key.code, key.modifiers);

        if context.search_focused {
            return Some(self.dispatch_search(key, &combo));
        }

        if context.is_modal_active() {
            return Some(
                self.config
                    .get_modal(context.modal, &combo)
                    .cloned()
                    .unwrap_or(Command::Noop),
            );
        }

        if let Some(cmd) = self.config.get_dashboard(&combo) {
            return Some(cmd.clone());
        }

        if context.is_table_view() && combo.modifiers.is_empty() {
            if let KeyCode::Char(c @ '1'..='9') = key.code {
                let column = c.to_digit(10).map(|d| d as usize)?;
                return Some(Command::SortByColumn(column));
            }
        }

        None
    }

    fn dispatch_search(&self, key: KeyEvent, combo: &KeyCombo) -> Command {
        if let Some(cmd) = self.config.get_search(combo) {
            return cmd.clone();
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Command::SearchTypeChar(c)
            }
            _ => Command::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ModalType;
    use crate::state::ViewMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        for ctx in [
            InputContext::new(),
            InputContext::new().with_search_focused(true),
            InputContext::new().with_modal(ModalType::Detail),
        ] {
            assert_eq!(registry.dispatch(ctrl_c, &ctx), Some(Command::Quit));
        }
    }

    #[test]
    fn test_search_box_captures_characters() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_search_focused(true);

        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &ctx),
            Some(Command::SearchTypeChar('q'))
        );
        assert_eq!(
            registry.dispatch(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT), &ctx),
            Some(Command::SearchTypeChar('D'))
        );
        assert_eq!(registry.dispatch(key(KeyCode::Enter), &ctx), Some(Command::SubmitSearch));
        assert_eq!(registry.dispatch(key(KeyCode::Esc), &ctx), Some(Command::CancelSearch));
        assert_eq!(registry.dispatch(key(KeyCode::Left), &ctx), Some(Command::Noop));
    }

    #[test]
    fn test_modal_swallows_dashboard_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::Video);

        assert_eq!(registry.dispatch(key(KeyCode::Right), &ctx), Some(Command::Noop));
        assert_eq!(registry.dispatch(key(KeyCode::Esc), &ctx), Some(Command::CloseModal));
    }

    #[test]
    fn test_shifted_letters_reach_dashboard_bindings() {
        let registry = CommandRegistry::new();
        let shifted_s = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(
            registry.dispatch(shifted_s, &InputContext::new()),
            Some(Command::PrevSortField)
        );
    }

    #[test]
    fn test_digits_only_sort_in_table_view() {
        let registry = CommandRegistry::new();
        let three = key(KeyCode::Char('3'));

        assert_eq!(registry.dispatch(three, &InputContext::new()), None);
        let table = InputContext::new().with_view_mode(ViewMode::Table);
        assert_eq!(registry.dispatch(three, &table), Some(Command::SortByColumn(3)));
        assert_eq!(registry.dispatch(key(KeyCode::Char('0')), &table), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let registry = CommandRegistry::new();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(registry.dispatch(release, &InputContext::new()), None);
    }
}
