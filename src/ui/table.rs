//! Table view
//!
//! Nine columns, each bound to a sort field. Header cells are click targets
//! and digits `1`-`9` sort by the matching column.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

use crate::models::format::{format_cpm, format_rate, formatted_count, non_empty, EMPTY_CELL};
use crate::models::{Record, SortField};
use crate::query::QueryState;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{hover_style, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG};
use crate::view_state::RenderModel;

/// A table column and the field it sorts by.
#[derive(Debug, Clone, Copy)]
pub struct TableColumn {
    pub title: &'static str,
    pub field: SortField,
    pub width: Constraint,
    pub numeric: bool,
}

const fn column(title: &'static str, field: SortField, width: Constraint, numeric: bool) -> TableColumn {
    TableColumn {
        title,
        field,
        width,
        numeric,
    }
}

pub const TABLE_COLUMNS: [TableColumn; 9] = [
    column("ID", SortField::Id, Constraint::Length(6), true),
    column("Name", SortField::AuthorName, Constraint::Fill(1), false),
    column("Account", SortField::AccountId, Constraint::Length(16), false),
    column("Followers", SortField::FollowerCount, Constraint::Length(11), true),
    column("Views", SortField::ViewsCount, Constraint::Length(9), true),
    column("Likes", SortField::LikesCount, Constraint::Length(9), true),
    column("Engagement", SortField::EngagementRate, Constraint::Length(12), true),
    column("CPM", SortField::EstimatedCpm, Constraint::Length(7), true),
    column("Tier", SortField::FollowerTier, Constraint::Length(10), false),
];

const COLUMN_SPACING: u16 = 1;

/// Sort field of the 1-based table column, as typed on the number keys.
pub fn column_sort_field(column: usize) -> Option<SortField> {
    column
        .checked_sub(1)
        .and_then(|idx| TABLE_COLUMNS.get(idx))
        .map(|c| c.field)
}

/// Header title with the key hint and, for the active sort column, the direction arrow.
pub fn header_title(index: usize, column: &TableColumn, query: &QueryState) -> String {
    let arrow = if query.sort_field == Some(column.field) {
        query.sort_order.arrow()
    } else {
        ""
    };
    format!("{} {}{}", index + 1, column.title, arrow)
}

/// Cell values for one row, in column order.
pub fn row_cells(record: &Record) -> [String; 9] {
    let text = |value: Option<&str>| non_empty(value).unwrap_or(EMPTY_CELL).to_string();
    [
        if record.id == 0 {
            EMPTY_CELL.to_string()
        } else {
            record.id.to_string()
        },
        text(record.author_name.as_deref()),
        format!("@{}", non_empty(record.account_id.as_deref()).unwrap_or(EMPTY_CELL)),
        formatted_count(record.follower_count_formatted.as_deref()).to_string(),
        formatted_count(record.views_count_formatted.as_deref()).to_string(),
        formatted_count(record.likes_count_formatted.as_deref()).to_string(),
        format_rate(record.engagement_rate, 2, EMPTY_CELL),
        format_cpm(record.estimated_cpm, 0, EMPTY_CELL),
        text(record.follower_tier.as_deref()),
    ]
}

/// First row to draw so that `selected` is on screen.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible.max(1))
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &RenderModel,
    selected: usize,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let widths: Vec<Constraint> = TABLE_COLUMNS.iter().map(|c| c.width).collect();

    // Header cells double as sort buttons
    let header_area = Rect { height: 1, ..inner };
    let header_rects = Layout::horizontal(widths.clone())
        .spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .split(header_area);
    for (column, rect) in TABLE_COLUMNS.iter().zip(header_rects.iter()) {
        registry.register(*rect, ClickAction::SortColumn(column.field), Some(hover_style()));
    }

    let header = Row::new(TABLE_COLUMNS.iter().enumerate().map(|(i, column)| {
        let title = header_title(i, column, model.query);
        let active = model.query.sort_field == Some(column.field);
        let base = if active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let style = registry.hover_style(header_rects[i]).unwrap_or(base);
        let cell = Line::from(Span::styled(title, style));
        Cell::from(if column.numeric {
            cell.alignment(Alignment::Right)
        } else {
            cell
        })
    }));

    let visible = inner.height.saturating_sub(1) as usize;
    let offset = scroll_offset(selected, visible);

    let rows = model
        .records
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, record)| {
            let y = inner.y + 1 + (idx - offset) as u16;
            registry.register(
                Rect::new(inner.x, y, inner.width, 1),
                ClickAction::OpenRecord(idx),
                None,
            );

            let cells = row_cells(record)
                .into_iter()
                .zip(TABLE_COLUMNS.iter())
                .map(|(value, column)| {
                    let line = Line::raw(value);
                    Cell::from(if column.numeric {
                        line.alignment(Alignment::Right)
                    } else {
                        line
                    })
                });
            let row = Row::new(cells);
            if idx == selected {
                row.style(
                    Style::default()
                        .bg(COLOR_SELECTED_BG)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start);
    frame.render_widget(table, inner);
}
