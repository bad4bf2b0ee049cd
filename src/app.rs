//! Application state management.
//!
//! Manages the condition list, search execution, results, post-filters,
//! selection, and UI mode.

use crate::config::Config;
use crate::filter::{PostFilters, filter_procedures};
use crate::procedures::{CATEGORIES, MANAGERS, Procedure, execute_search};
use crate::query::ConditionList;
use std::cmp;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Application state and UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal results navigation
    Browse,
    /// Editing the search conditions
    Query,
    /// Editing the post-filters
    Filters,
    /// Editing the pre-filter scope panel
    Scope,
}

/// Results view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Column table with header filters
    Table,
    /// Card grid
    Cards,
}

impl ViewMode {
    /// Parse a view mode from the config setting string.
    ///
    /// # Arguments
    /// * `setting` - Configured view name
    ///
    /// # Returns
    /// * `ViewMode` - Cards for "cards", Table otherwise
    pub fn from_setting(setting: &str) -> Self {
        if setting.eq_ignore_ascii_case("cards") {
            ViewMode::Cards
        } else {
            ViewMode::Table
        }
    }

    /// Toggle between table and cards.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }
}

/// Top-level navigation tab.
///
/// Only the Procedures tab has content; the others are placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Procedures,
    Sections,
    Questions,
    QuestionDetails,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Tab; 4] = [
        Tab::Procedures,
        Tab::Sections,
        Tab::Questions,
        Tab::QuestionDetails,
    ];

    /// Get the display label for this tab.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Procedures => "Procedures",
            Tab::Sections => "Sections",
            Tab::Questions => "Questions",
            Tab::QuestionDetails => "Question Details",
        }
    }

    /// Get the next tab in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }
}

/// Pre-filter scope settings.
///
/// These mirror the backend's query-scoping options; the mock backend
/// ignores them, so they affect state only, never the returned data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreFilters {
    /// Match against procedure titles
    pub procedure_title: bool,
    /// Match against procedure body text
    pub procedure_text: bool,
    /// Include procedures flagged invisible
    pub include_invisible: bool,
    /// Include procedures on hidden accounts
    pub include_hidden_accounts: bool,
    /// Category scope ("All" or a concrete category)
    pub category: String,
    /// Requested result ordering (accepted but not applied by the stub)
    pub sort_by: String,
}

impl Default for PreFilters {
    fn default() -> Self {
        Self {
            procedure_title: true,
            procedure_text: false,
            include_invisible: false,
            include_hidden_accounts: false,
            category: "All".to_string(),
            sort_by: "Relevance".to_string(),
        }
    }
}

/// Sort options offered by the scope panel.
pub const SORT_OPTIONS: [&str; 3] = ["Relevance", "Title", "Category"];

/// Editable field in the post-filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Title,
    AccountName,
    Cid,
    Sid,
    Pid,
    Category,
    Manager,
}

impl FilterField {
    /// All fields, in panel order.
    pub const ALL: [FilterField; 7] = [
        FilterField::Title,
        FilterField::AccountName,
        FilterField::Cid,
        FilterField::Sid,
        FilterField::Pid,
        FilterField::Category,
        FilterField::Manager,
    ];

    /// Get the display label for this field.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Title => "Title",
            FilterField::AccountName => "Account Name",
            FilterField::Cid => "CID",
            FilterField::Sid => "SID",
            FilterField::Pid => "PID",
            FilterField::Category => "Category",
            FilterField::Manager => "Manager",
        }
    }

    /// Whether this field is a select rather than a text input.
    pub fn is_select(&self) -> bool {
        matches!(self, FilterField::Category | FilterField::Manager)
    }
}

/// Editable field in the pre-filter scope panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeField {
    ProcedureTitle,
    ProcedureText,
    IncludeInvisible,
    IncludeHiddenAccounts,
    Category,
    SortBy,
}

impl ScopeField {
    /// All fields, in panel order.
    pub const ALL: [ScopeField; 6] = [
        ScopeField::ProcedureTitle,
        ScopeField::ProcedureText,
        ScopeField::IncludeInvisible,
        ScopeField::IncludeHiddenAccounts,
        ScopeField::Category,
        ScopeField::SortBy,
    ];

    /// Get the display label for this field.
    pub fn label(&self) -> &'static str {
        match self {
            ScopeField::ProcedureTitle => "Procedure Title",
            ScopeField::ProcedureText => "Procedure Text",
            ScopeField::IncludeInvisible => "Include Invisible",
            ScopeField::IncludeHiddenAccounts => "Include Hidden Accounts",
            ScopeField::Category => "Category",
            ScopeField::SortBy => "Sort By",
        }
    }

}

/// Main application state.
///
/// Manages all application data including conditions, search results,
/// filters, and selection.
#[derive(Debug)]
pub struct App {
    /// Current UI mode
    pub mode: UiMode,
    /// Active navigation tab
    pub active_tab: Tab,
    /// Current results view
    pub view_mode: ViewMode,
    /// Search condition list
    pub conditions: ConditionList,
    /// Condition row being edited in Query mode
    pub condition_cursor: usize,
    /// Pre-filter scope settings
    pub pre_filters: PreFilters,
    /// Field being edited in Scope mode
    pub scope_cursor: usize,
    /// Full batch from the last completed search
    pub results: Vec<Procedure>,
    /// Post-filtered subset of `results`
    pub filtered: Vec<Procedure>,
    /// Title substring filter (table header field)
    pub title_filter: String,
    /// Exact category filter (table header select)
    pub category_filter: String,
    /// Remaining post-filters
    pub post_filters: PostFilters,
    /// Field being edited in Filters mode
    pub filter_cursor: usize,
    /// Highlight cursor in the filtered results
    pub cursor: usize,
    /// Id of the procedure shown in the detail panel
    pub selected_id: Option<String>,
    /// Whether at least one search has completed
    pub has_searched: bool,
    /// Whether a search is pending
    pub is_searching: bool,
    /// Blocking validation notice; swallows input until dismissed
    pub notice: Option<String>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Simulated backend latency
    pub search_delay: Duration,
    /// Batch size requested from the backend
    pub batch_size: usize,
    /// Sequence number of the latest submitted search
    search_seq: u64,
    /// Pending search task, tagged with its sequence number
    search_task: Option<(u64, JoinHandle<Vec<Procedure>>)>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `App` - New application state
    pub fn new(config: &Config) -> Self {
        Self {
            mode: UiMode::Browse,
            active_tab: Tab::Procedures,
            view_mode: ViewMode::from_setting(&config.default_view),
            conditions: ConditionList::new(),
            condition_cursor: 0,
            pre_filters: PreFilters::default(),
            scope_cursor: 0,
            results: Vec::new(),
            filtered: Vec::new(),
            title_filter: String::new(),
            category_filter: String::new(),
            post_filters: PostFilters::default(),
            filter_cursor: 0,
            cursor: 0,
            selected_id: None,
            has_searched: false,
            is_searching: false,
            notice: None,
            status_message: None,
            search_delay: Duration::from_millis(config.search_delay_ms),
            batch_size: config.result_batch_size,
            search_seq: 0,
            search_task: None,
        }
    }

    // --- Search execution ---

    /// Validate the condition list and start a search.
    ///
    /// # Details
    /// On a validation failure, sets the blocking notice and changes no
    /// other state. On success, clears the selection, supersedes any
    /// pending search, and spawns the delayed backend call tagged with a
    /// fresh sequence number.
    pub fn submit_search(&mut self) {
        if self.conditions.validate().is_err() {
            self.notice = Some("Please enter a search term for all conditions.".to_string());
            return;
        }

        self.selected_id = None;
        self.is_searching = true;
        self.search_seq += 1;
        if let Some((_, old)) = self.search_task.take() {
            old.abort();
        }
        let handle = tokio::spawn(execute_search(
            self.conditions.clone(),
            self.search_delay,
            self.batch_size,
        ));
        self.search_task = Some((self.search_seq, handle));
        self.set_status("Searching procedures...".to_string());
    }

    /// Apply a finished search task, if any.
    ///
    /// # Details
    /// Called on every event-loop tick. A batch is applied only when its
    /// sequence tag still matches the latest submission; responses from
    /// superseded searches are discarded.
    pub async fn poll_search(&mut self) {
        let finished = matches!(&self.search_task, Some((_, handle)) if handle.is_finished());
        if !finished {
            return;
        }
        let Some((seq, handle)) = self.search_task.take() else {
            return;
        };
        let Ok(batch) = handle.await else {
            // Aborted by a newer submission
            return;
        };
        if seq != self.search_seq {
            // Stale response
            return;
        }

        self.results = batch;
        self.has_searched = true;
        self.is_searching = false;
        self.cursor = 0;
        self.apply_post_filters();
        self.set_status(format!("Loaded {} procedures", self.results.len()));
    }

    /// Whether a search task is currently pending.
    #[allow(dead_code)] // Useful for a future search-cancel affordance
    pub fn has_pending_search(&self) -> bool {
        self.search_task.is_some()
    }

    /// Reset the full search: conditions, results, filters, and selection.
    pub fn clear_search(&mut self) {
        self.conditions.reset();
        self.condition_cursor = 0;
        self.results.clear();
        self.filtered.clear();
        self.cursor = 0;
        self.selected_id = None;
        self.has_searched = false;
        self.reset_post_filters();
        self.set_status("Search reset".to_string());
    }

    // --- Post-filtering ---

    /// Recompute the filtered subset from the current constraints.
    ///
    /// # Details
    /// Clamps the cursor to the new subset and clears the selection when
    /// the selected record no longer passes the filters.
    pub fn apply_post_filters(&mut self) {
        self.filtered = filter_procedures(
            &self.results,
            &self.title_filter,
            &self.category_filter,
            &self.post_filters,
        );
        self.cursor = cmp::min(self.cursor, self.filtered.len().saturating_sub(1));
        if let Some(ref id) = self.selected_id
            && !self.filtered.iter().any(|p| &p.id == id)
        {
            self.selected_id = None;
        }
    }

    /// Clear every post-filter constraint and refilter.
    pub fn reset_post_filters(&mut self) {
        self.post_filters = PostFilters::default();
        self.title_filter.clear();
        self.category_filter.clear();
        self.apply_post_filters();
    }

    /// Whether any post-filter constraint is active.
    pub fn has_active_post_filters(&self) -> bool {
        !self.title_filter.is_empty()
            || !self.category_filter.is_empty()
            || self.post_filters.is_active()
    }

    // --- Selection and navigation ---

    /// Move the results cursor up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.filtered.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Move the results cursor down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.filtered.len();
    }

    /// Select the record under the cursor for the detail panel.
    pub fn select_under_cursor(&mut self) {
        if let Some(proc) = self.filtered.get(self.cursor) {
            self.selected_id = Some(proc.id.clone());
        }
    }

    /// Dismiss the detail panel selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Get the procedure shown in the detail panel.
    ///
    /// # Returns
    /// * `Option<&Procedure>` - Selected procedure, if still in the
    ///   filtered view
    pub fn selected_procedure(&self) -> Option<&Procedure> {
        let id = self.selected_id.as_deref()?;
        self.filtered.iter().find(|p| p.id == id)
    }

    /// Switch to a tab and reset the results cursor.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.cursor = 0;
    }

    /// Switch to the next tab in display order.
    pub fn next_tab(&mut self) {
        self.switch_tab(self.active_tab.next());
    }

    /// Toggle between table and cards view.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    /// Dismiss the blocking notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Set the status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    // --- Post-filter panel editing ---

    /// Get the field under the filter panel cursor.
    pub fn filter_field(&self) -> FilterField {
        FilterField::ALL[self.filter_cursor % FilterField::ALL.len()]
    }

    /// Move the filter panel cursor by one field, wrapping.
    pub fn move_filter_cursor(&mut self, down: bool) {
        let len = FilterField::ALL.len();
        self.filter_cursor = if down {
            (self.filter_cursor + 1) % len
        } else {
            (self.filter_cursor + len - 1) % len
        };
    }

    /// Get the displayed value of a filter field.
    pub fn filter_field_value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Title => &self.title_filter,
            FilterField::AccountName => &self.post_filters.account_name,
            FilterField::Cid => &self.post_filters.cid,
            FilterField::Sid => &self.post_filters.sid,
            FilterField::Pid => &self.post_filters.pid,
            FilterField::Category => &self.category_filter,
            FilterField::Manager => &self.post_filters.relationship_manager,
        }
    }

    /// Append a character to the filter field under the cursor.
    ///
    /// # Details
    /// Select fields ignore typed characters. Refilters immediately.
    pub fn push_filter_char(&mut self, ch: char) {
        if let Some(value) = self.filter_text_value_mut() {
            value.push(ch);
            self.apply_post_filters();
        }
    }

    /// Remove the last character from the filter field under the cursor.
    pub fn pop_filter_char(&mut self) {
        if let Some(value) = self.filter_text_value_mut() {
            value.pop();
            self.apply_post_filters();
        }
    }

    /// Cycle a select filter field through its options.
    ///
    /// # Arguments
    /// * `forward` - Direction of the cycle
    ///
    /// # Details
    /// Category cycles "" plus the fixed category list; Manager cycles ""
    /// plus the fixed manager list. Text fields are unaffected. Refilters
    /// immediately.
    pub fn cycle_filter_option(&mut self, forward: bool) {
        match self.filter_field() {
            FilterField::Category => {
                self.category_filter = cycle_option(&self.category_filter, &CATEGORIES, forward);
                self.apply_post_filters();
            }
            FilterField::Manager => {
                self.post_filters.relationship_manager =
                    cycle_option(&self.post_filters.relationship_manager, &MANAGERS, forward);
                self.apply_post_filters();
            }
            _ => {}
        }
    }

    fn filter_text_value_mut(&mut self) -> Option<&mut String> {
        match self.filter_field() {
            FilterField::Title => Some(&mut self.title_filter),
            FilterField::AccountName => Some(&mut self.post_filters.account_name),
            FilterField::Cid => Some(&mut self.post_filters.cid),
            FilterField::Sid => Some(&mut self.post_filters.sid),
            FilterField::Pid => Some(&mut self.post_filters.pid),
            FilterField::Category | FilterField::Manager => None,
        }
    }

    // --- Scope panel editing ---

    /// Get the field under the scope panel cursor.
    pub fn scope_field(&self) -> ScopeField {
        ScopeField::ALL[self.scope_cursor % ScopeField::ALL.len()]
    }

    /// Move the scope panel cursor by one field, wrapping.
    pub fn move_scope_cursor(&mut self, down: bool) {
        let len = ScopeField::ALL.len();
        self.scope_cursor = if down {
            (self.scope_cursor + 1) % len
        } else {
            (self.scope_cursor + len - 1) % len
        };
    }

    /// Toggle the checkbox under the scope cursor.
    ///
    /// # Details
    /// No-op on the select fields; those cycle via
    /// [`App::cycle_scope_option`]. Scope settings only record intent:
    /// the mock backend never reads them.
    pub fn toggle_scope_field(&mut self) {
        match self.scope_field() {
            ScopeField::ProcedureTitle => {
                self.pre_filters.procedure_title = !self.pre_filters.procedure_title;
            }
            ScopeField::ProcedureText => {
                self.pre_filters.procedure_text = !self.pre_filters.procedure_text;
            }
            ScopeField::IncludeInvisible => {
                self.pre_filters.include_invisible = !self.pre_filters.include_invisible;
            }
            ScopeField::IncludeHiddenAccounts => {
                self.pre_filters.include_hidden_accounts = !self.pre_filters.include_hidden_accounts;
            }
            ScopeField::Category | ScopeField::SortBy => {}
        }
    }

    /// Cycle a scope select field through its options.
    pub fn cycle_scope_option(&mut self, forward: bool) {
        match self.scope_field() {
            ScopeField::Category => {
                let mut options = vec!["All"];
                options.extend(CATEGORIES);
                self.pre_filters.category =
                    cycle_listed(&self.pre_filters.category, &options, forward);
            }
            ScopeField::SortBy => {
                self.pre_filters.sort_by =
                    cycle_listed(&self.pre_filters.sort_by, &SORT_OPTIONS, forward);
            }
            _ => {}
        }
    }

    // --- Condition editing ---

    /// Move the condition cursor by one row, wrapping.
    pub fn move_condition_cursor(&mut self, down: bool) {
        let len = self.conditions.len();
        self.condition_cursor = if down {
            (self.condition_cursor + 1) % len
        } else {
            (self.condition_cursor + len - 1) % len
        };
    }

    /// Add a condition row and move the cursor onto it.
    pub fn add_condition(&mut self) {
        self.conditions.add();
        self.condition_cursor = self.conditions.len() - 1;
    }

    /// Remove the condition row under the cursor.
    pub fn remove_condition(&mut self) {
        self.conditions.remove_at(self.condition_cursor);
        self.condition_cursor = cmp::min(self.condition_cursor, self.conditions.len() - 1);
    }
}

/// Cycle a select value through "" plus the given options.
fn cycle_option(current: &str, options: &[&str], forward: bool) -> String {
    let mut all = vec![""];
    all.extend_from_slice(options);
    cycle_listed(current, &all, forward)
}

/// Cycle a value through a closed option list, wrapping at both ends.
fn cycle_listed(current: &str, options: &[&str], forward: bool) -> String {
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::generate_procedures;

    fn test_app(delay_ms: u64) -> App {
        App::new(&Config {
            search_delay_ms: delay_ms,
            ..Config::default()
        })
    }

    fn fill_conditions(app: &mut App, value: &str) {
        let id = app.conditions.conditions()[0].id;
        app.conditions.set_value(id, value);
    }

    async fn wait_for_search(app: &mut App) {
        for _ in 0..400 {
            app.poll_search().await;
            if !app.is_searching {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("search did not complete in time");
    }

    #[test]
    fn test_app_new() {
        let app = test_app(800);
        assert_eq!(app.mode, UiMode::Browse);
        assert_eq!(app.active_tab, Tab::Procedures);
        assert_eq!(app.view_mode, ViewMode::Table);
        assert_eq!(app.conditions.len(), 1);
        assert!(!app.has_searched);
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_view_mode_from_setting() {
        assert_eq!(ViewMode::from_setting("cards"), ViewMode::Cards);
        assert_eq!(ViewMode::from_setting("Cards"), ViewMode::Cards);
        assert_eq!(ViewMode::from_setting("table"), ViewMode::Table);
        assert_eq!(ViewMode::from_setting("bogus"), ViewMode::Table);
    }

    #[test]
    fn test_invalid_submit_sets_notice_and_changes_nothing() {
        let mut app = test_app(10);
        app.submit_search();
        assert!(app.notice.is_some());
        assert!(!app.is_searching);
        assert!(!app.has_searched);
        assert!(!app.has_pending_search());
        assert!(app.results.is_empty());

        fill_conditions(&mut app, "   ");
        app.submit_search();
        assert!(app.notice.is_some());
        assert!(!app.has_pending_search());
    }

    #[tokio::test]
    async fn test_submit_and_poll_search() {
        let mut app = test_app(10);
        fill_conditions(&mut app, "audit");
        app.submit_search();
        assert!(app.is_searching);
        assert!(app.has_pending_search());

        wait_for_search(&mut app).await;
        assert!(app.has_searched);
        assert_eq!(app.results.len(), 80);
        assert_eq!(app.filtered.len(), 80);
        assert!(app.selected_id.is_none());
    }

    #[tokio::test]
    async fn test_new_search_clears_selection() {
        let mut app = test_app(10);
        fill_conditions(&mut app, "audit");
        app.submit_search();
        wait_for_search(&mut app).await;

        app.select_under_cursor();
        assert!(app.selected_id.is_some());

        app.submit_search();
        assert!(app.selected_id.is_none());
        wait_for_search(&mut app).await;
    }

    #[tokio::test]
    async fn test_stale_search_response_is_discarded() {
        let mut app = test_app(20);
        fill_conditions(&mut app, "audit");
        app.submit_search();
        // Supersede the first search with a smaller batch before it lands.
        app.batch_size = 40;
        app.submit_search();

        wait_for_search(&mut app).await;
        assert_eq!(app.results.len(), 40);

        // The superseded task must never overwrite the newer batch.
        tokio::time::sleep(Duration::from_millis(60)).await;
        app.poll_search().await;
        assert_eq!(app.results.len(), 40);
        assert!(!app.has_pending_search());
    }

    #[test]
    fn test_apply_post_filters_clears_dropped_selection() {
        let mut app = test_app(10);
        app.results = generate_procedures(10);
        app.has_searched = true;
        app.apply_post_filters();

        app.cursor = 5;
        app.select_under_cursor();
        assert_eq!(app.selected_id.as_deref(), Some("proc-5"));

        // proc-5 is a Tax Reporting record, so a Compliance title filter
        // drops it from the filtered view.
        app.title_filter = "Compliance".to_string();
        app.apply_post_filters();
        assert_eq!(app.filtered.len(), 2);
        assert!(app.selected_id.is_none());
    }

    #[test]
    fn test_selection_survives_filter_that_keeps_it() {
        let mut app = test_app(10);
        app.results = generate_procedures(10);
        app.apply_post_filters();
        app.cursor = 0;
        app.select_under_cursor();

        app.title_filter = "Compliance".to_string();
        app.apply_post_filters();
        assert_eq!(app.selected_id.as_deref(), Some("proc-0"));
        assert_eq!(app.selected_procedure().map(|p| p.id.as_str()), Some("proc-0"));
    }

    #[test]
    fn test_clear_search_resets_everything() {
        let mut app = test_app(10);
        app.results = generate_procedures(10);
        app.has_searched = true;
        app.title_filter = "Compliance".to_string();
        app.conditions.add();
        app.apply_post_filters();
        app.select_under_cursor();

        app.clear_search();
        assert!(app.results.is_empty());
        assert!(app.filtered.is_empty());
        assert!(!app.has_searched);
        assert!(app.selected_id.is_none());
        assert_eq!(app.conditions.len(), 1);
        assert!(!app.has_active_post_filters());
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut app = test_app(10);
        app.results = generate_procedures(3);
        app.apply_post_filters();

        assert_eq!(app.cursor, 0);
        app.move_down();
        assert_eq!(app.cursor, 1);
        app.move_up();
        assert_eq!(app.cursor, 0);
        app.move_up();
        assert_eq!(app.cursor, 2);
        app.move_down();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_filter_panel_editing() {
        let mut app = test_app(10);
        app.results = generate_procedures(80);
        app.apply_post_filters();

        // Title is the first field.
        assert_eq!(app.filter_field(), FilterField::Title);
        for ch in "compliance".chars() {
            app.push_filter_char(ch);
        }
        assert_eq!(app.title_filter, "compliance");
        assert_eq!(app.filtered.len(), 14);

        app.pop_filter_char();
        assert_eq!(app.title_filter, "complianc");

        // Move to the Manager select and cycle it.
        while app.filter_field() != FilterField::Manager {
            app.move_filter_cursor(true);
        }
        app.cycle_filter_option(true);
        assert_eq!(app.post_filters.relationship_manager, "Sarah Jenkins");
        app.cycle_filter_option(false);
        assert!(app.post_filters.relationship_manager.is_empty());

        // Typing into a select changes nothing.
        app.push_filter_char('x');
        assert!(app.post_filters.relationship_manager.is_empty());
    }

    #[test]
    fn test_category_select_cycles_back_to_any() {
        let mut app = test_app(10);
        while app.filter_field() != FilterField::Category {
            app.move_filter_cursor(true);
        }
        for _ in 0..=CATEGORIES.len() {
            app.cycle_filter_option(true);
        }
        assert!(app.category_filter.is_empty());
    }

    #[test]
    fn test_scope_panel_editing() {
        let mut app = test_app(10);
        assert_eq!(app.scope_field(), ScopeField::ProcedureTitle);
        app.toggle_scope_field();
        assert!(!app.pre_filters.procedure_title);

        while app.scope_field() != ScopeField::SortBy {
            app.move_scope_cursor(true);
        }
        app.cycle_scope_option(true);
        assert_eq!(app.pre_filters.sort_by, "Title");
        // Space on a select is a no-op.
        app.toggle_scope_field();
        assert_eq!(app.pre_filters.sort_by, "Title");
    }

    #[test]
    fn test_scope_settings_do_not_affect_results() {
        let mut app = test_app(10);
        app.results = generate_procedures(20);
        app.apply_post_filters();
        app.pre_filters.category = "Compliance".to_string();
        app.pre_filters.sort_by = "Category".to_string();
        app.apply_post_filters();
        assert_eq!(app.filtered.len(), 20);
        assert_eq!(app.filtered, app.results);
    }

    #[test]
    fn test_condition_cursor_follows_add_and_remove() {
        let mut app = test_app(10);
        app.add_condition();
        app.add_condition();
        assert_eq!(app.condition_cursor, 2);
        app.remove_condition();
        assert_eq!(app.conditions.len(), 2);
        assert_eq!(app.condition_cursor, 1);
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = test_app(10);
        app.next_tab();
        assert_eq!(app.active_tab, Tab::Sections);
        app.next_tab();
        app.next_tab();
        app.next_tab();
        assert_eq!(app.active_tab, Tab::Procedures);
    }
}
