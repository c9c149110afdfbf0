//! Page navigation command handlers.

use crate::app::App;
use crate::input::Command;
use crate::state::Action;

pub fn handle_pagination_command(app: &mut App, cmd: &Command) -> bool {
    let action = match cmd {
        Command::PrevPage => Action::PrevPage,
        Command::NextPage => Action::NextPage,
        Command::FirstPage => Action::GoToPage(1),
        Command::LastPage => Action::GoToPage(app.dashboard.window().total_pages),
        Command::CyclePageSize => {
            Action::SetPageSize(app.dashboard.pagination().page_size.cycle_next())
        }
        _ => return false,
    };
    app.dispatch(action);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockBrowser, MockClipboard};
    use crate::models::{Dataset, Record, Summary};
    use crate::pagination::PageSize;
    use crate::startup::DashboardConfig;

    fn app(n: i64) -> App {
        let mut app = App::with_desktop(
            DashboardConfig::default(),
            Box::new(MockClipboard::new()),
            Box::new(MockBrowser::new()),
        );
        let records = (1..=n).map(Record::new).collect();
        app.dispatch(Action::DatasetLoaded(Box::new(Dataset::new(
            Summary::default(),
            records,
        ))));
        app
    }

    #[test]
    fn test_first_and_last_page() {
        let mut app = app(95);
        handle_pagination_command(&mut app, &Command::LastPage);
        assert_eq!(app.dashboard.pagination().current_page, 5);
        assert_eq!(app.dashboard.page_records().len(), 15);

        handle_pagination_command(&mut app, &Command::FirstPage);
        assert_eq!(app.dashboard.pagination().current_page, 1);
    }

    #[test]
    fn test_cycle_page_size_resets_page() {
        let mut app = app(95);
        handle_pagination_command(&mut app, &Command::NextPage);
        handle_pagination_command(&mut app, &Command::CyclePageSize);

        assert_eq!(app.dashboard.pagination().page_size, PageSize::Fixed(50));
        assert_eq!(app.dashboard.pagination().current_page, 1);
    }

    #[test]
    fn test_non_pagination_command_ignored() {
        let mut app = app(1);
        assert!(!handle_pagination_command(&mut app, &Command::OpenDetail));
    }
}
