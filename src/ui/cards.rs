//! Card grid rendering for search results.
//!
//! Displays the filtered procedures as a grid of bordered cards, three per
//! row, scrolled to keep the cursor visible.

use crate::app::App;
use crate::procedures::{Procedure, ProcedureStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cards laid out per grid row.
const CARDS_PER_ROW: usize = 3;
/// Terminal rows each card occupies.
const CARD_HEIGHT: u16 = 6;

fn status_color(status: ProcedureStatus) -> Color {
    match status {
        ProcedureStatus::Active => Color::Green,
        ProcedureStatus::InReview => Color::Yellow,
        ProcedureStatus::Draft => Color::Blue,
        ProcedureStatus::Archived => Color::DarkGray,
    }
}

/// Render the results card grid.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each card shows status, CID, title, account, manager, and last-updated
/// date. The cursor card is highlighted; the card selected for the detail
/// panel gets a yellow border.
pub fn render_cards(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!(
        "Procedures ({}/{})",
        app.filtered.len(),
        app.results.len()
    );
    let outer = Block::default().title(title).borders(Borders::ALL);
    let inner = outer.inner(area);
    Widget::render(outer, area, buf);

    if app.filtered.is_empty() {
        let empty = Paragraph::new("No results match your post-filters.")
            .style(Style::default().fg(Color::Gray));
        Widget::render(empty, inner, buf);
        return;
    }

    let grid_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = app.filtered.len().div_ceil(CARDS_PER_ROW);
    let cursor_row = app.cursor / CARDS_PER_ROW;

    // Scroll by whole grid rows, keeping the cursor row in view.
    let first_row = cursor_row
        .saturating_sub(grid_rows / 2)
        .min(total_rows.saturating_sub(grid_rows));

    let row_constraints: Vec<Constraint> = (0..grid_rows)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row_slot, row_area) in row_areas.iter().enumerate() {
        let row_idx = first_row + row_slot;
        if row_idx >= total_rows {
            break;
        }
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(*row_area);

        for (col, col_area) in col_areas.iter().enumerate() {
            let idx = row_idx * CARDS_PER_ROW + col;
            if let Some(proc) = app.filtered.get(idx) {
                render_card(proc, idx == app.cursor, app.selected_id.as_deref(), *col_area, buf);
            }
        }
    }
}

fn render_card(
    proc: &Procedure,
    under_cursor: bool,
    selected_id: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let is_detail = selected_id == Some(proc.id.as_str());
    let border_style = if is_detail {
        Style::default().fg(Color::Yellow)
    } else if under_cursor {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if under_cursor {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(proc.status.label(), Style::default().fg(status_color(proc.status))),
            Span::styled(
                format!("  {}", proc.cid),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(proc.title.clone(), title_style)),
        Line::from(Span::styled(
            proc.account_name.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("({}) {}", proc.manager_initial(), proc.relationship_manager),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("  {}", proc.format_updated()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    Widget::render(card, area, buf);
}
