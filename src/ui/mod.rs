//! UI rendering for the reelscope dashboard
//!
//! Every frame is drawn from a [`RenderModel`](crate::view_state::RenderModel)
//! built from the dashboard state, plus the few pieces of purely visual App
//! state (selection, search draft, overlay, toast).
//!
//! ## Layout
//!
//! ```text
//! +----------------------------------------------------------+
//! | HEADER: influencers │ views │ followers │ engagement │ cpm|
//! +----------------------------------------------------------+
//! | SEARCH                       | tier  sort  per page [view]|
//! +----------------------------------------------------------+
//! | BODY: card grid or table                                 |
//! |                                                          |
//! +----------------------------------------------------------+
//! | ‹ prev  1 … 4 [5] 6 … 20  next ›        Showing 81-100 / 400|
//! | key hints                                          toast |
//! +----------------------------------------------------------+
//! ```
//!
//! Clickable elements register hit areas while they are drawn; the registry
//! is cleared at the start of every frame.

pub mod cards;
pub mod components;
pub mod detail;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod interaction;
pub mod layout;
pub mod pager;
pub mod states;
pub mod table;
pub mod theme;
pub mod toolbar;
pub mod video;

pub use layout::LayoutContext;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Focus, Overlay};
use crate::state::ViewMode;

/// Ticks per cursor blink phase (the event loop ticks every 16ms)
pub const CURSOR_BLINK_TICKS: u64 = 30;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole dashboard for the current App state
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let layout = LayoutContext::new(area.width, area.height);
    app.hit_areas.clear();

    if layout.is_too_small() {
        states::render_too_small(frame, area);
        return;
    }

    let input_context = app.build_input_context();
    let model = app.dashboard.render_model();
    let registry = &mut app.hit_areas;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(toolbar::TOOLBAR_HEIGHT),
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Pagination bar
            Constraint::Length(1), // Footer hint + toast
        ])
        .split(area);

    header::render(frame, chunks[0], &model);

    let search = toolbar::SearchBox {
        draft: &app.search_draft,
        focused: app.focus == Focus::Search,
        cursor_visible: (app.tick_count / CURSOR_BLINK_TICKS) % 2 == 0,
    };
    toolbar::render(frame, chunks[1], &model, search, registry);

    // Body
    if model.status.is_loading() {
        states::render_loading(frame, chunks[2], &app.config.data.to_string(), app.tick_count);
    } else if model.is_empty() {
        states::render_empty(
            frame,
            chunks[2],
            model.query.has_filters(),
            model.status.error_message().is_some(),
        );
    } else {
        match model.view_mode {
            ViewMode::Card => cards::render(frame, chunks[2], &model, app.selected, &layout, registry),
            ViewMode::Table => table::render(frame, chunks[2], &model, app.selected, registry),
        }
    }

    if !model.status.is_loading() {
        pager::render(frame, chunks[3], &model.pagination, registry);
    }
    footer::render(frame, chunks[4], &input_context, app.notice.as_ref());

    // Overlays are drawn (and registered) last so they sit on top
    match &app.overlay {
        Some(Overlay::Detail { record_id }) => {
            if let Some(record) = app.dashboard.find_in_view(*record_id) {
                detail::render(frame, area, record, &layout, registry);
            }
        }
        Some(Overlay::Video { record_id, embed }) => {
            let record = app.dashboard.find_in_view(*record_id);
            video::render(frame, area, embed, record, &layout, registry);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::adapters::mock::{MockBrowser, MockClipboard};
    use crate::models::{Dataset, Record, Summary, SummaryStats};
    use crate::startup::DashboardConfig;
    use crate::state::Action;
    use crate::ui::interaction::ClickAction;

    fn create_test_app(n: i64) -> App {
        let mut app = App::with_desktop(
            DashboardConfig::default(),
            Box::new(MockClipboard::new()),
            Box::new(MockBrowser::new()),
        );
        let records = (1..=n)
            .map(|id| {
                let mut r = Record::new(id);
                r.author_name = Some(format!("Creator {id}"));
                r.account_id = Some(format!("creator{id}"));
                r
            })
            .collect();
        let summary = Summary::flat(SummaryStats {
            total_influencers: n as f64,
            ..SummaryStats::default()
        });
        app.dispatch(Action::DatasetLoaded(Box::new(Dataset::new(summary, records))));
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_card_view() {
        let mut app = create_test_app(45);
        let terminal = draw(&mut app, 120, 40);
        let text = buffer_text(&terminal);

        assert!(text.contains("reelscope"));
        assert!(text.contains("Creator 1"));
        assert!(text.contains("Showing 1-20 / 45"));
        assert!(text.contains("next ›"));
    }

    #[test]
    fn test_render_registers_page_buttons() {
        let mut app = create_test_app(45);
        draw(&mut app, 120, 40);

        let actions: Vec<ClickAction> = app.hit_areas.areas().iter().map(|a| a.action).collect();
        assert!(actions.contains(&ClickAction::GoToPage(3)));
        assert!(actions.contains(&ClickAction::NextPage));
        assert!(!actions.contains(&ClickAction::PrevPage));
        assert!(actions.contains(&ClickAction::ToggleViewMode));
        assert!(actions.contains(&ClickAction::OpenRecord(0)));
    }

    #[test]
    fn test_render_table_view_headers() {
        let mut app = create_test_app(5);
        app.dispatch(Action::SetViewMode(ViewMode::Table));
        let terminal = draw(&mut app, 140, 30);
        let text = buffer_text(&terminal);

        assert!(text.contains("1 ID"));
        assert!(text.contains("2 Name"));
        assert!(text.contains("@creator3"));
        // Single page: no pagination buttons
        assert!(!text.contains("next ›"));
    }

    #[test]
    fn test_render_detail_overlay() {
        let mut app = create_test_app(3);
        app.overlay = Some(Overlay::Detail { record_id: 2 });
        let terminal = draw(&mut app, 120, 50);
        let text = buffer_text(&terminal);

        assert!(text.contains("Detail"));
        assert!(text.contains("@creator2"));
        assert!(text.contains("No email"));
        assert!(app
            .hit_areas
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::CloseOverlay));
    }

    #[test]
    fn test_render_too_small() {
        let mut app = create_test_app(3);
        let terminal = draw(&mut app, 30, 8);
        assert!(buffer_text(&terminal).contains("too small"));
        assert!(app.hit_areas.is_empty());
    }

    #[test]
    fn test_render_loading() {
        let mut app = App::with_desktop(
            DashboardConfig::default(),
            Box::new(MockClipboard::new()),
            Box::new(MockBrowser::new()),
        );
        let terminal = draw(&mut app, 100, 30);
        let text = buffer_text(&terminal);
        assert!(text.contains("loading"));
        assert!(text.contains("data.json"));
    }
}
