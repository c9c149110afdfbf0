//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the application state relevant to key
//! dispatch: which modal is open, whether the search box has focus, and the
//! current view mode.

use crate::state::ViewMode;

/// The modal currently drawn above the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Record detail modal
    Detail,
    /// Video embed modal
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub modal: ModalType,
    /// Whether the search box is being edited
    pub search_focused: bool,
    pub view_mode: ViewMode,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            modal: ModalType::None,
            search_focused: false,
            view_mode: ViewMode::Card,
        }
    }
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_search_focused(mut self, focused: bool) -> Self {
        self.search_focused = focused;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_table_view(&self) -> bool {
        self.view_mode == ViewMode::Table
    }
}
