//! Detail side panel rendering.
//!
//! Displays the overview, operational data, and ownership sections for the
//! selected procedure, or a placeholder when nothing is selected.

use crate::app::App;
use crate::procedures::{Procedure, ProcedureStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

fn status_color(status: ProcedureStatus) -> Color {
    match status {
        ProcedureStatus::Active => Color::Green,
        ProcedureStatus::InReview => Color::Yellow,
        ProcedureStatus::Draft => Color::Blue,
        ProcedureStatus::Archived => Color::DarkGray,
    }
}

/// Render the detail side panel.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_detail(app: &App, area: Rect, buf: &mut Buffer) {
    let outer = Block::default().title("Detail").borders(Borders::ALL);
    let inner = outer.inner(area);
    Widget::render(outer, area, buf);

    match app.selected_procedure() {
        Some(proc) => render_selected(proc, inner, buf),
        None => render_placeholder(inner, buf),
    }
}

fn render_selected(proc: &Procedure, area: Rect, buf: &mut Buffer) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),     // Overview
            Constraint::Length(6),  // Operational data
            Constraint::Length(5),  // Ownership + progress
        ])
        .split(area);

    let overview = vec![
        Line::from(Span::styled(
            proc.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(proc.status.label(), Style::default().fg(status_color(proc.status))),
            Span::styled(
                format!("  Updated {}", proc.format_updated()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", proc.snippet),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    let overview = Paragraph::new(overview)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Overview").borders(Borders::TOP));
    Widget::render(overview, sections[0], buf);

    let operational = vec![
        Line::from(vec![
            Span::styled("Account: ", Style::default().fg(Color::Cyan)),
            Span::styled(proc.account_name.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::Cyan)),
            Span::styled(proc.category.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}  {}  {}", proc.cid, proc.pid, proc.sid),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];
    let operational = Paragraph::new(operational)
        .block(Block::default().title("Operational Data").borders(Borders::TOP));
    Widget::render(operational, sections[1], buf);

    let owner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(sections[2]);

    let owner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("({}) ", proc.manager_initial()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            proc.relationship_manager.clone(),
            Style::default().fg(Color::White),
        ),
    ]))
    .block(Block::default().title("Owner").borders(Borders::TOP));
    Widget::render(owner, owner_area[0], buf);

    let progress = Gauge::default()
        .block(Block::default().title("Review Progress"))
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(f64::from(proc.completion).clamp(0.0, 100.0) / 100.0)
        .label(format!("{}%", proc.completion));
    Widget::render(progress, owner_area[1], buf);
}

fn render_placeholder(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select for Insight",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Choose a row or card to explore the full lifecycle of a procedure.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let placeholder = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });
    Widget::render(placeholder, area, buf);
}
