//! Terminal management module with RAII pattern for automatic cleanup.
//!
//! The `TerminalManager` puts the terminal into TUI mode and guarantees it is
//! restored when the dashboard exits, whether normally, through an error
//! returned from the event loop, or through a panic.
//!
//! # Example
//!
//! ```no_run
//! use reelscope::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     color_eyre::install()?;
//!     setup_panic_hook();
//!
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... run the event loop ...
//!
//!     // Terminal is restored when term_manager is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;

use crate::error::UiError;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and the guard that restores it.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with mouse capture and
    /// bracketed paste, and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode().map_err(init_failed)?;

        // Create the guard before anything else can fail, so a failed setup
        // still leaves raw mode.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestoreFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

fn init_failed(err: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}
