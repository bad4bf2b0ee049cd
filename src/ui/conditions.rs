//! Condition builder widget rendering.
//!
//! Displays the advanced-search condition rows with their operators,
//! values, and AND/OR connectives.

use crate::app::{App, UiMode};
use crate::query::{LogicalOperator, MAX_CONDITIONS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the condition builder widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each condition renders as `[Operator] value`; connective rows render
/// between conditions. The row under the cursor is highlighted while in
/// Query mode, with a trailing cursor marker on its value.
pub fn render_conditions(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Query;
    let mut lines = Vec::new();

    for (idx, cond) in app.conditions.conditions().iter().enumerate() {
        if idx > 0 {
            let connective = cond.connective.unwrap_or(LogicalOperator::And);
            lines.push(Line::from(Span::styled(
                format!("  {}", connective.label()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let row_selected = is_active && idx == app.condition_cursor;
        let marker = if row_selected { "> " } else { "  " };
        let value_style = if row_selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(
                marker,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{:<12}] ", cond.operator.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                if cond.value.is_empty() && !row_selected {
                    "Enter search term...".to_string()
                } else {
                    cond.value.clone()
                },
                if cond.value.is_empty() && !row_selected {
                    Style::default().fg(Color::DarkGray)
                } else {
                    value_style
                },
            ),
        ];
        if row_selected {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
    }

    if is_active {
        lines.push(Line::from(Span::styled(
            "Enter: search | Ctrl+n: add | Ctrl+d: remove | Ctrl+o: operator | Ctrl+g: AND/OR | Esc: done",
            Style::default().fg(Color::Yellow),
        )));
    }

    let title = format!(
        "Advanced Search ({}/{} conditions){}",
        app.conditions.len(),
        MAX_CONDITIONS,
        if is_active { "" } else { " (press '/')" }
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
