//! Post-filter panel rendering.
//!
//! Displays the per-field constraints that narrow the fetched results,
//! with a cursor for field editing.

use crate::app::{App, FilterField, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the post-filter panel widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// One line per field. Text fields show their substring constraint;
/// the category and manager selects show "Any" when unconstrained.
/// The field under the cursor is marked while in Filters mode.
pub fn render_filters(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Filters;
    let mut lines = Vec::new();

    for (idx, field) in FilterField::ALL.iter().enumerate() {
        let under_cursor = is_active && idx == app.filter_cursor;
        let marker = if under_cursor { "> " } else { "  " };
        let value = app.filter_field_value(*field);

        let rendered_value = if value.is_empty() {
            if field.is_select() {
                Span::styled("Any", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled("", Style::default())
            }
        } else {
            Span::styled(value.to_string(), Style::default().fg(Color::White))
        };

        let mut spans = vec![
            Span::styled(
                marker,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<14}", field.label()),
                Style::default().fg(Color::Cyan),
            ),
            rendered_value,
        ];
        if under_cursor && !field.is_select() {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        if under_cursor && field.is_select() {
            spans.push(Span::styled(
                "  (Left/Right to change)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    if is_active {
        lines.push(Line::from(Span::styled(
            "Type to filter | Ctrl+r: clear all | Esc: done",
            Style::default().fg(Color::Yellow),
        )));
    }

    let title = if app.has_active_post_filters() {
        "Post-Filters (active)"
    } else {
        "Post-Filters"
    };

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
