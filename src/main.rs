//! Procedure Search TUI - terminal interface for searching and previewing
//! account procedures.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod filter;
mod procedures;
mod query;
mod ui;

use app::{App, Tab, UiMode, ViewMode};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;
use ui::table::{TABLE_CHROME_LINES, scroll_offset};

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, initializes the terminal, and runs the event loop.
/// The application works without a config file; defaults are used then.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Screen regions computed from the frame area and current state.
#[derive(Debug, Clone, Copy)]
struct AppLayout {
    tabs: Rect,
    conditions: Rect,
    aux_panel: Rect,
    results: Rect,
    detail: Rect,
    status: Rect,
}

/// Compute the screen layout.
///
/// # Arguments
/// * `area` - Full frame area
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Details
/// The condition block grows with the number of condition rows; the
/// auxiliary panel (scope or post-filters) collapses to zero height when
/// neither is being edited nor active. Shared with the mouse handler so
/// click coordinates map onto the same regions the renderer used.
fn compute_layout(area: Rect, app: &App, config: &Config) -> AppLayout {
    let condition_lines = app.conditions.len() * 2 - 1;
    let condition_height =
        (condition_lines + if app.mode == UiMode::Query { 1 } else { 0 }) as u16 + 2;

    let aux_height = match app.mode {
        UiMode::Scope => 9,
        UiMode::Filters => 10,
        _ if app.has_active_post_filters() => 9,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Tabs
            Constraint::Length(condition_height), // Condition builder
            Constraint::Length(aux_height),       // Scope / post-filter panel
            Constraint::Min(0),                   // Results + detail
            Constraint::Length(1),                // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(config.detail_panel_width),
        ])
        .split(chunks[3]);

    AppLayout {
        tabs: chunks[0],
        conditions: chunks[1],
        aux_panel: chunks[2],
        results: main[0],
        detail: main[1],
        status: chunks[4],
    }
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
/// * `config` - Configuration
fn render_ui(f: &mut ratatui::Frame, app: &App, config: &Config) {
    let layout = compute_layout(f.area(), app, config);
    let buf = f.buffer_mut();

    ui::render_tabs(app, layout.tabs, buf);
    ui::render_conditions(app, layout.conditions, buf);

    if layout.aux_panel.height > 0 {
        if app.mode == UiMode::Scope {
            ui::render_scope(app, layout.aux_panel, buf);
        } else {
            ui::render_filters(app, layout.aux_panel, buf);
        }
    }

    if app.active_tab == Tab::Procedures {
        if app.has_searched {
            match app.view_mode {
                ViewMode::Table => ui::render_table(app, layout.results, buf),
                ViewMode::Cards => ui::render_cards(app, layout.results, buf),
            }
        } else {
            render_empty_state(app, layout.results, buf);
        }
        ui::render_detail(app, layout.detail, buf);
    } else {
        render_tab_placeholder(app, layout.results.union(layout.detail), buf);
    }

    render_status_bar(app, layout.status, buf);

    if let Some(ref message) = app.notice {
        ui::render_notice(message, f.area(), f.buffer_mut());
    }
}

/// Render the pre-search empty state.
fn render_empty_state(app: &App, area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let text = if app.is_searching {
        "Searching procedures..."
    } else {
        "No Active Query. Execute a search ('s') to view and preview account procedures."
    };
    let paragraph = Paragraph::new(Line::from(text))
        .style(Style::default().fg(Color::Gray))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().title("Procedures").borders(Borders::ALL));
    ratatui::widgets::Widget::render(paragraph, area, buf);
}

/// Render the placeholder for tabs without content.
fn render_tab_placeholder(app: &App, area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let paragraph = Paragraph::new(Line::from(format!(
        "The {} view is not available yet.",
        app.active_tab.label()
    )))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    ratatui::widgets::Widget::render(paragraph, area, buf);
}

/// Render the status bar: a transient message or per-mode key hints.
fn render_status_bar(app: &App, area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let hint = match app.mode {
        UiMode::Browse => {
            "q: quit | /: query | s: search | f: filters | p: scope | v: view | Tab: tabs | Enter: detail | r: reset"
        }
        UiMode::Query => "Editing query (Esc to finish)",
        UiMode::Filters => "Editing post-filters (Esc to finish)",
        UiMode::Scope => "Editing scope (Esc to finish)",
    };
    let text = app.status_message.as_deref().unwrap_or(hint);
    let paragraph = Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Gray));
    ratatui::widgets::Widget::render(paragraph, area, buf);
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Polls for input with a timeout so pending searches are applied promptly,
/// dispatches keyboard events per UI mode, and handles mouse scroll/click.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        app.poll_search().await;

        let mut results_area = Rect::default();
        terminal.draw(|f| {
            results_area = compute_layout(f.area(), app, config).results;
            render_ui(f, app, config);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // A blocking notice swallows everything but dismissal.
                if app.notice.is_some() {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                        app.dismiss_notice();
                    }
                    continue;
                }

                match app.mode {
                    UiMode::Browse => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Tab => app.next_tab(),
                        KeyCode::Char('1') => app.switch_tab(Tab::Procedures),
                        KeyCode::Char('2') => app.switch_tab(Tab::Sections),
                        KeyCode::Char('3') => app.switch_tab(Tab::Questions),
                        KeyCode::Char('4') => app.switch_tab(Tab::QuestionDetails),
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Enter => app.select_under_cursor(),
                        KeyCode::Esc | KeyCode::Char('x') => app.clear_selection(),
                        KeyCode::Char('v') => app.toggle_view_mode(),
                        KeyCode::Char('/') => app.mode = UiMode::Query,
                        KeyCode::Char('f') => app.mode = UiMode::Filters,
                        KeyCode::Char('p') => app.mode = UiMode::Scope,
                        KeyCode::Char('s') => app.submit_search(),
                        KeyCode::Char('r') => app.clear_search(),
                        _ => {}
                    },
                    UiMode::Query => match key.code {
                        KeyCode::Esc => app.mode = UiMode::Browse,
                        KeyCode::Enter => {
                            app.submit_search();
                            if app.notice.is_none() {
                                app.mode = UiMode::Browse;
                            }
                        }
                        KeyCode::Up => app.move_condition_cursor(false),
                        KeyCode::Down => app.move_condition_cursor(true),
                        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.add_condition();
                        }
                        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.remove_condition();
                        }
                        KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.conditions.cycle_operator(app.condition_cursor);
                        }
                        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.conditions.toggle_connective(app.condition_cursor);
                        }
                        KeyCode::Backspace => app.conditions.pop_value_char(app.condition_cursor),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.conditions.push_value_char(app.condition_cursor, c);
                        }
                        _ => {}
                    },
                    UiMode::Filters => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.mode = UiMode::Browse,
                        KeyCode::Up => app.move_filter_cursor(false),
                        KeyCode::Down => app.move_filter_cursor(true),
                        KeyCode::Left => app.cycle_filter_option(false),
                        KeyCode::Right => app.cycle_filter_option(true),
                        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.reset_post_filters();
                        }
                        KeyCode::Backspace => app.pop_filter_char(),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.push_filter_char(c);
                        }
                        _ => {}
                    },
                    UiMode::Scope => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.mode = UiMode::Browse,
                        KeyCode::Up => app.move_scope_cursor(false),
                        KeyCode::Down => app.move_scope_cursor(true),
                        KeyCode::Char(' ') => app.toggle_scope_field(),
                        KeyCode::Left => app.cycle_scope_option(false),
                        KeyCode::Right => app.cycle_scope_option(true),
                        _ => {}
                    },
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, results_area),
            _ => {}
        }
    }

    Ok(())
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `results_area` - Area of the results widget in the last frame
///
/// # Details
/// Scroll moves the results cursor; a left click on a visible table row
/// moves the cursor there and opens the record in the detail panel.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, results_area: Rect) {
    if app.mode != UiMode::Browse || app.active_tab != Tab::Procedures {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if app.view_mode != ViewMode::Table || app.filtered.is_empty() {
                return;
            }
            // First data row sits below the top border and the header row.
            let first_data_row = results_area.y + 2;
            if mouse.column < results_area.x
                || mouse.column >= results_area.x + results_area.width
                || mouse.row < first_data_row
                || mouse.row >= results_area.y + results_area.height.saturating_sub(1)
            {
                return;
            }

            let visible_rows = results_area
                .height
                .saturating_sub(TABLE_CHROME_LINES)
                .max(1) as usize;
            let offset = scroll_offset(app.cursor, app.filtered.len(), visible_rows);
            let index = offset + (mouse.row - first_data_row) as usize;
            if index < app.filtered.len() {
                app.cursor = index;
                app.select_under_cursor();
            }
        }
        _ => {}
    }
}
