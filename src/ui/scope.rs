//! Pre-filter scope panel rendering.
//!
//! Displays the search-scope checkboxes and selects. These settings are
//! forwarded to the backend stub, which ignores them.

use crate::app::{App, ScopeField, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the scope panel widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_scope(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Scope;
    let mut lines = Vec::new();

    for (idx, field) in ScopeField::ALL.iter().enumerate() {
        let under_cursor = is_active && idx == app.scope_cursor;
        let marker = if under_cursor { "> " } else { "  " };

        let value_span = match field {
            ScopeField::ProcedureTitle => checkbox(app.pre_filters.procedure_title),
            ScopeField::ProcedureText => checkbox(app.pre_filters.procedure_text),
            ScopeField::IncludeInvisible => checkbox(app.pre_filters.include_invisible),
            ScopeField::IncludeHiddenAccounts => checkbox(app.pre_filters.include_hidden_accounts),
            ScopeField::Category => Span::styled(
                app.pre_filters.category.clone(),
                Style::default().fg(Color::Magenta),
            ),
            ScopeField::SortBy => Span::styled(
                app.pre_filters.sort_by.clone(),
                Style::default().fg(Color::Magenta),
            ),
        };

        lines.push(Line::from(vec![
            Span::styled(
                marker,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<24}", field.label()),
                Style::default().fg(Color::Cyan),
            ),
            value_span,
        ]));
    }

    if is_active {
        lines.push(Line::from(Span::styled(
            "Space: toggle | Left/Right: change selects | Esc: done",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Pre-Filters: Visibility & Scope")
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}

fn checkbox(checked: bool) -> Span<'static> {
    if checked {
        Span::styled("[x]", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ ]", Style::default().fg(Color::Gray))
    }
}
