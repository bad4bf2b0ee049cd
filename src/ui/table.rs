//! Table view rendering for search results.
//!
//! Displays the filtered procedures as a column table with one row per
//! record, a highlight cursor, and a marker style for the record shown in
//! the detail panel.

use crate::app::App;
use crate::procedures::{Procedure, ProcedureStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

/// Number of chrome lines around the table body (borders plus header row).
pub const TABLE_CHROME_LINES: u16 = 3;

/// Compute the scroll offset that keeps the cursor centered.
///
/// # Arguments
/// * `cursor` - Index of the highlighted row
/// * `len` - Total number of rows
/// * `visible_rows` - Rows that fit in the body area
///
/// # Returns
/// * `usize` - First visible row index
///
/// # Details
/// Shared with the mouse handler so that a click on a visible row maps
/// back to the same record the renderer drew there.
pub fn scroll_offset(cursor: usize, len: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    let centered = cursor.saturating_sub(visible_rows / 2);
    centered.min(len.saturating_sub(visible_rows))
}

fn status_style(status: ProcedureStatus) -> Style {
    let color = match status {
        ProcedureStatus::Active => Color::Green,
        ProcedureStatus::InReview => Color::Yellow,
        ProcedureStatus::Draft => Color::Blue,
        ProcedureStatus::Archived => Color::DarkGray,
    };
    Style::default().fg(color)
}

/// Render the results table widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Columns: title, account, category, manager, status. The block title
/// shows the filtered/total counts; the record selected for the detail
/// panel is underlined.
pub fn render_table(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!(
        "Procedures ({}/{})",
        app.filtered.len(),
        app.results.len()
    );

    if app.filtered.is_empty() {
        let empty = Table::new(
            vec![Row::new(vec![Cell::from(
                "No results match your post-filters.",
            )])],
            [Constraint::Percentage(100)],
        )
        .block(Block::default().title(title).borders(Borders::ALL));
        StatefulWidget::render(empty, area, buf, &mut TableState::default());
        return;
    }

    let visible_rows = area.height.saturating_sub(TABLE_CHROME_LINES).max(1) as usize;
    let offset = scroll_offset(app.cursor, app.filtered.len(), visible_rows);

    let rows: Vec<Row> = app
        .filtered
        .iter()
        .map(|proc| procedure_row(proc, app.selected_id.as_deref()))
        .collect();

    let header = Row::new(vec!["Title", "Account", "Category", "Manager", "Status"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(24),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(10),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL))
    .row_highlight_style(
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    *state.offset_mut() = offset;
    state.select(Some(app.cursor));

    StatefulWidget::render(table, area, buf, &mut state);
}

fn procedure_row<'a>(proc: &'a Procedure, selected_id: Option<&str>) -> Row<'a> {
    let is_detail = selected_id == Some(proc.id.as_str());
    let title_style = if is_detail {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    };

    Row::new(vec![
        Cell::from(proc.title.as_str()).style(title_style),
        Cell::from(proc.account_name.as_str()),
        Cell::from(proc.category.as_str()).style(Style::default().fg(Color::Cyan)),
        Cell::from(proc.relationship_manager.as_str()).style(Style::default().fg(Color::Gray)),
        Cell::from(proc.status.label()).style(status_style(proc.status)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_pins_to_start() {
        assert_eq!(scroll_offset(0, 80, 20), 0);
        assert_eq!(scroll_offset(5, 80, 20), 0);
    }

    #[test]
    fn test_scroll_offset_centers_cursor() {
        assert_eq!(scroll_offset(40, 80, 20), 30);
    }

    #[test]
    fn test_scroll_offset_pins_to_end() {
        assert_eq!(scroll_offset(79, 80, 20), 60);
        assert_eq!(scroll_offset(75, 80, 20), 60);
    }

    #[test]
    fn test_scroll_offset_short_list() {
        assert_eq!(scroll_offset(2, 3, 20), 0);
        assert_eq!(scroll_offset(0, 0, 20), 0);
    }
}
