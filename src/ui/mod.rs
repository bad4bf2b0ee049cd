//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod cards;
pub mod conditions;
pub mod detail;
pub mod filters;
pub mod notice;
pub mod scope;
pub mod table;
pub mod tabs;

pub use cards::render_cards;
pub use conditions::render_conditions;
pub use detail::render_detail;
pub use filters::render_filters;
pub use notice::render_notice;
pub use scope::render_scope;
pub use table::render_table;
pub use tabs::render_tabs;
