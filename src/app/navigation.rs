//! Mouse navigation for the App.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::App;
use crate::state::Action;
use crate::ui::interaction::ClickAction;

impl App {
    /// Route a mouse event through the hit areas of the last frame.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(event.column, event.row) {
                    self.handle_click(action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(event.column, event.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollUp => self.select_prev(),
            MouseEventKind::ScrollDown => self.select_next(),
            _ => {}
        }
    }

    pub fn handle_click(&mut self, action: ClickAction) {
        debug!(?action, "Click");
        match action {
            ClickAction::GoToPage(page) => {
                self.dispatch(Action::GoToPage(page));
            }
            ClickAction::PrevPage => {
                self.dispatch(Action::PrevPage);
            }
            ClickAction::NextPage => {
                self.dispatch(Action::NextPage);
            }
            ClickAction::SortColumn(field) => {
                self.dispatch(Action::SortByColumn(field));
            }
            ClickAction::ToggleViewMode => {
                self.dispatch(Action::ToggleViewMode);
            }
            ClickAction::OpenRecord(row) => {
                if self.select_row(row) {
                    self.open_detail();
                }
            }
            ClickAction::CopyEmail => self.copy_email(),
            ClickAction::OpenVideo => self.open_video(),
            ClickAction::OpenInBrowser => self.open_in_browser(),
            ClickAction::CloseOverlay => self.close_overlay(),
            ClickAction::Noop => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::adapters::mock::{MockBrowser, MockClipboard};
    use crate::app::{App, Overlay};
    use crate::models::{Dataset, Record, SortField, Summary};
    use crate::startup::DashboardConfig;
    use crate::state::{Action, ViewMode};
    use crate::ui::interaction::ClickAction;

    fn app_with(n: i64) -> App {
        let mut app = App::with_desktop(
            DashboardConfig::default(),
            Box::new(MockClipboard::new()),
            Box::new(MockBrowser::new()),
        );
        let records = (1..=n)
            .map(|id| {
                let mut r = Record::new(id);
                r.views_count = Some(id as f64);
                r
            })
            .collect();
        app.dispatch(Action::DatasetLoaded(Box::new(Dataset::new(
            Summary::default(),
            records,
        ))));
        app
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_routes_through_hit_areas() {
        let mut app = app_with(100);
        app.hit_areas.register(Rect::new(10, 0, 3, 1), ClickAction::GoToPage(4), None);

        app.handle_mouse(left_click(11, 0));
        assert_eq!(app.dashboard.pagination().current_page, 4);

        app.handle_mouse(left_click(40, 0));
        assert_eq!(app.dashboard.pagination().current_page, 4);
    }

    #[test]
    fn test_header_click_sorts_and_resets_page() {
        let mut app = app_with(45);
        app.dispatch(Action::SetViewMode(ViewMode::Table));
        app.dispatch(Action::GoToPage(3));

        app.handle_click(ClickAction::SortColumn(SortField::ViewsCount));
        assert_eq!(app.dashboard.pagination().current_page, 1);
        assert_eq!(app.dashboard.page_records()[0].id, 45);
    }

    #[test]
    fn test_open_record_click() {
        let mut app = app_with(5);
        app.handle_click(ClickAction::OpenRecord(2));
        assert_eq!(app.overlay, Some(Overlay::Detail { record_id: 3 }));

        app.handle_click(ClickAction::CloseOverlay);
        assert!(app.overlay.is_none());

        app.handle_click(ClickAction::OpenRecord(9));
        assert!(app.overlay.is_none());
    }
}
