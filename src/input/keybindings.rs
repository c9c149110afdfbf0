//! Default keybindings for the dashboard.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;

/// A key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Normalize a key event: terminals report `T` as `Shift+T`, so Shift is
    /// dropped for character keys and the character itself carries the case.
    pub fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => Self::new(code, modifiers.difference(KeyModifiers::SHIFT)),
            _ => Self::new(code, modifiers),
        }
    }
}

/// Keybinding configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active whenever the search box does not have focus and no modal is open
    pub dashboard: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Editing keys while the search box has focus
    pub search: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            dashboard: HashMap::new(),
            modal: HashMap::new(),
            search: HashMap::new(),
        };

        config.setup_dashboard_bindings();
        config.setup_modal_bindings();
        config.setup_search_bindings();

        config
    }

    fn setup_dashboard_bindings(&mut self) {
        let bindings = [
            (KeyCombo::plain(KeyCode::Char('q')), Command::Quit),
            (KeyCombo::plain(KeyCode::Char('/')), Command::FocusSearch),
            (KeyCombo::plain(KeyCode::Char('c')), Command::ClearFilters),
            (KeyCombo::plain(KeyCode::Char('t')), Command::NextTier),
            (KeyCombo::plain(KeyCode::Char('T')), Command::PrevTier),
            (KeyCombo::plain(KeyCode::Char('s')), Command::NextSortField),
            (KeyCombo::plain(KeyCode::Char('S')), Command::PrevSortField),
            (KeyCombo::plain(KeyCode::Char('o')), Command::ToggleSortOrder),
            (KeyCombo::plain(KeyCode::Char('v')), Command::ToggleViewMode),
            (KeyCombo::plain(KeyCode::Char('p')), Command::CyclePageSize),
            (KeyCombo::plain(KeyCode::Char('+')), Command::CyclePageSize),
            // Pages
            (KeyCombo::plain(KeyCode::Left), Command::PrevPage),
            (KeyCombo::plain(KeyCode::Char('h')), Command::PrevPage),
            (KeyCombo::plain(KeyCode::Right), Command::NextPage),
            (KeyCombo::plain(KeyCode::Char('l')), Command::NextPage),
            (KeyCombo::plain(KeyCode::Home), Command::FirstPage),
            (KeyCombo::plain(KeyCode::End), Command::LastPage),
            // Records
            (KeyCombo::plain(KeyCode::Up), Command::SelectionUp),
            (KeyCombo::plain(KeyCode::Char('k')), Command::SelectionUp),
            (KeyCombo::plain(KeyCode::Down), Command::SelectionDown),
            (KeyCombo::plain(KeyCode::Char('j')), Command::SelectionDown),
            (KeyCombo::plain(KeyCode::Enter), Command::OpenDetail),
            (KeyCombo::plain(KeyCode::Char('w')), Command::OpenVideo),
            (KeyCombo::plain(KeyCode::Char('y')), Command::CopyEmail),
            (KeyCombo::plain(KeyCode::Char('b')), Command::OpenInBrowser),
        ];
        self.dashboard.extend(bindings);
    }

    fn setup_modal_bindings(&mut self) {
        let mut detail = HashMap::new();
        detail.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseModal);
        detail.insert(KeyCombo::plain(KeyCode::Char('q')), Command::CloseModal);
        detail.insert(KeyCombo::plain(KeyCode::Enter), Command::CloseModal);
        detail.insert(KeyCombo::plain(KeyCode::Char('y')), Command::CopyEmail);
        detail.insert(KeyCombo::plain(KeyCode::Char('w')), Command::OpenVideo);
        detail.insert(KeyCombo::plain(KeyCode::Char('b')), Command::OpenInBrowser);
        self.modal.insert(ModalType::Detail, detail);

        let mut video = HashMap::new();
        video.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseModal);
        video.insert(KeyCombo::plain(KeyCode::Char('q')), Command::CloseModal);
        video.insert(KeyCombo::plain(KeyCode::Char('b')), Command::OpenInBrowser);
        video.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenInBrowser);
        self.modal.insert(ModalType::Video, video);
    }

    fn setup_search_bindings(&mut self) {
        self.search
            .insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Esc), Command::CancelSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::SearchBackspace);
        self.search
            .insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::SearchClearLine);
    }

    pub fn get_dashboard(&self, combo: &KeyCombo) -> Option<&Command> {
        self.dashboard.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_search(&self, combo: &KeyCombo) -> Option<&Command> {
        self.search.get(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_is_dropped_for_chars() {
        let combo = KeyCombo::from_event(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(combo, KeyCombo::plain(KeyCode::Char('T')));

        let combo = KeyCombo::from_event(KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(combo.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_default_dashboard_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_dashboard(&KeyCombo::plain(KeyCode::Char('t'))),
            Some(&Command::NextTier)
        );
        assert_eq!(
            config.get_dashboard(&KeyCombo::plain(KeyCode::Char('T'))),
            Some(&Command::PrevTier)
        );
        assert_eq!(
            config.get_dashboard(&KeyCombo::plain(KeyCode::Home)),
            Some(&Command::FirstPage)
        );
    }

    #[test]
    fn test_modal_bindings() {
        let config = KeybindingConfig::new();
        let esc = KeyCombo::plain(KeyCode::Esc);
        assert_eq!(config.get_modal(ModalType::Detail, &esc), Some(&Command::CloseModal));
        assert_eq!(config.get_modal(ModalType::Video, &esc), Some(&Command::CloseModal));
        assert_eq!(config.get_modal(ModalType::None, &esc), None);
    }
}
