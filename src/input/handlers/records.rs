//! Selection, modal and desktop-integration handlers.

use crate::app::App;
use crate::input::Command;

pub fn handle_record_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::SelectionUp => app.select_prev(),
        Command::SelectionDown => app.select_next(),
        Command::OpenDetail => app.open_detail(),
        Command::OpenVideo => app.open_video(),
        Command::CopyEmail => app.copy_email(),
        Command::OpenInBrowser => app.open_in_browser(),
        Command::CloseModal => app.close_overlay(),
        _ => return false,
    }
    true
}
