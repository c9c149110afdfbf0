//! Panic hook for terminal restoration.
//!
//! Restores the terminal before the panic report is printed, so the report
//! lands on the normal screen instead of the alternate one.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call after `color_eyre::install()` so the hook wraps color-eyre's panic
/// reporter, and before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
