//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

/// Every action a key press can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,

    // =========================================================================
    // Search box
    // =========================================================================
    /// Focus the search box (/)
    FocusSearch,
    SearchTypeChar(char),
    SearchBackspace,
    /// Clear the whole search box (Ctrl+U)
    SearchClearLine,
    /// Apply the search box contents (Enter)
    SubmitSearch,
    /// Leave the search box, discarding the draft (Esc)
    CancelSearch,

    // =========================================================================
    // Query
    // =========================================================================
    /// Reset search, tier and sort field (c)
    ClearFilters,
    NextTier,
    PrevTier,
    NextSortField,
    PrevSortField,
    ToggleSortOrder,
    ToggleViewMode,
    /// Sort by the n-th table column, 1-based (1-9 in table view)
    SortByColumn(usize),

    // =========================================================================
    // Pagination
    // =========================================================================
    CyclePageSize,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,

    // =========================================================================
    // Records and modals
    // =========================================================================
    SelectionUp,
    SelectionDown,
    OpenDetail,
    OpenVideo,
    CopyEmail,
    OpenInBrowser,
    CloseModal,

    /// Swallow the key without doing anything
    Noop,
}

impl Command {
    /// Returns true if this command should trigger a UI redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns a human-readable description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::FocusSearch => "Search",
            Command::SearchTypeChar(_) => "Type in search box",
            Command::SearchBackspace => "Delete previous character",
            Command::SearchClearLine => "Clear search box",
            Command::SubmitSearch => "Apply search",
            Command::CancelSearch => "Leave search box",
            Command::ClearFilters => "Clear filters",
            Command::NextTier => "Next tier",
            Command::PrevTier => "Previous tier",
            Command::NextSortField => "Next sort field",
            Command::PrevSortField => "Previous sort field",
            Command::ToggleSortOrder => "Toggle sort order",
            Command::ToggleViewMode => "Toggle card/table view",
            Command::SortByColumn(_) => "Sort by column",
            Command::CyclePageSize => "Change page size",
            Command::PrevPage => "Previous page",
            Command::NextPage => "Next page",
            Command::FirstPage => "First page",
            Command::LastPage => "Last page",
            Command::SelectionUp => "Select previous",
            Command::SelectionDown => "Select next",
            Command::OpenDetail => "Details",
            Command::OpenVideo => "Watch video",
            Command::CopyEmail => "Copy email",
            Command::OpenInBrowser => "Open in browser",
            Command::CloseModal => "Close",
            Command::Noop => "No operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_marks_dirty() {
        assert!(Command::SearchTypeChar('a').marks_dirty());
        assert!(Command::NextPage.marks_dirty());
        assert!(!Command::Noop.marks_dirty());
    }

    #[test]
    fn test_command_is_quit() {
        assert!(Command::Quit.is_quit());
        assert!(!Command::CloseModal.is_quit());
    }

    #[test]
    fn test_command_description() {
        assert_eq!(Command::CopyEmail.description(), "Copy email");
        assert_eq!(Command::SortByColumn(3).description(), "Sort by column");
    }
}
