//! Procedure record model.
//!
//! Contains the record structure shown in the results views and the detail
//! panel, plus display helpers.

use chrono::NaiveDate;

/// Lifecycle status of a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureStatus {
    Active,
    InReview,
    Draft,
    Archived,
}

impl ProcedureStatus {
    /// All statuses, in rotation order.
    pub const ALL: [ProcedureStatus; 4] = [
        ProcedureStatus::Active,
        ProcedureStatus::InReview,
        ProcedureStatus::Draft,
        ProcedureStatus::Archived,
    ];

    /// Get the display label for this status.
    ///
    /// # Returns
    /// * `&str` - Status label
    pub fn label(&self) -> &'static str {
        match self {
            ProcedureStatus::Active => "Active",
            ProcedureStatus::InReview => "In Review",
            ProcedureStatus::Draft => "Draft",
            ProcedureStatus::Archived => "Archived",
        }
    }
}

/// A compliance/operations procedure record.
///
/// Records are immutable once generated; the full set is replaced wholesale
/// on each search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Procedure {
    /// Record identifier, unique within a batch
    pub id: String,
    /// Procedure title
    pub title: String,
    /// Account the procedure belongs to
    pub account_name: String,
    /// Client identifier
    pub cid: String,
    /// Procedure identifier
    pub pid: String,
    /// Section identifier
    pub sid: String,
    /// Procedure category
    pub category: String,
    /// Assigned relationship manager
    pub relationship_manager: String,
    /// Short description shown in the detail panel
    pub snippet: String,
    /// Lifecycle status
    pub status: ProcedureStatus,
    /// Date of the last update
    pub last_updated: NaiveDate,
    /// Review progress percentage (45-99)
    pub completion: u8,
}

impl Procedure {
    /// Format the last-updated date as a short readable string.
    ///
    /// # Returns
    /// * `String` - Formatted date (e.g., "Jan 5, 2024")
    pub fn format_updated(&self) -> String {
        self.last_updated.format("%b %-d, %Y").to_string()
    }

    /// Get the manager's initial for the avatar badge.
    ///
    /// # Returns
    /// * `char` - First character of the manager name, or '?' when empty
    pub fn manager_initial(&self) -> char {
        self.relationship_manager.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Procedure {
        Procedure {
            id: "proc-0".to_string(),
            title: "Compliance Protocol v1.2".to_string(),
            account_name: "Global Enterprise 100".to_string(),
            cid: "CID-2000".to_string(),
            pid: "PID-5000".to_string(),
            sid: "SID-8000".to_string(),
            category: "Compliance".to_string(),
            relationship_manager: "Sarah Jenkins".to_string(),
            snippet: "Snippet".to_string(),
            status: ProcedureStatus::Active,
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            completion: 45,
        }
    }

    #[test]
    fn test_format_updated() {
        assert_eq!(sample().format_updated(), "Jan 5, 2024");
    }

    #[test]
    fn test_manager_initial() {
        let mut proc = sample();
        assert_eq!(proc.manager_initial(), 'S');
        proc.relationship_manager.clear();
        assert_eq!(proc.manager_initial(), '?');
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProcedureStatus::Active.label(), "Active");
        assert_eq!(ProcedureStatus::InReview.label(), "In Review");
        assert_eq!(ProcedureStatus::Draft.label(), "Draft");
        assert_eq!(ProcedureStatus::Archived.label(), "Archived");
    }
}
