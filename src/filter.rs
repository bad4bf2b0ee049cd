//! Post-filtering of fetched search results.
//!
//! Pure, order-preserving narrowing of an already fetched batch. Free-text
//! constraints match case-insensitively by substring; the category and
//! manager selects match by exact equality. Active constraints combine
//! with AND and empty constraints impose no restriction.

use crate::procedures::Procedure;

/// Per-field constraints applied to fetched results.
///
/// The title and category filters are tracked separately by the application
/// state because the table header exposes them independently of this panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilters {
    /// Client identifier substring
    pub cid: String,
    /// Section identifier substring
    pub sid: String,
    /// Procedure identifier substring
    pub pid: String,
    /// Account name substring
    pub account_name: String,
    /// Exact relationship manager name
    pub relationship_manager: String,
}

impl PostFilters {
    /// Whether any field holds a constraint.
    pub fn is_active(&self) -> bool {
        !self.cid.is_empty()
            || !self.sid.is_empty()
            || !self.pid.is_empty()
            || !self.account_name.is_empty()
            || !self.relationship_manager.is_empty()
    }
}

/// Case-insensitive substring containment; an empty needle always matches.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter a batch of procedures against the current constraints.
///
/// # Arguments
/// * `records` - Full fetched batch
/// * `title` - Title substring constraint (may be empty)
/// * `category` - Exact category constraint (may be empty)
/// * `post` - Remaining per-field constraints
///
/// # Returns
/// * `Vec<Procedure>` - Matching subset, in the input order
pub fn filter_procedures(
    records: &[Procedure],
    title: &str,
    category: &str,
    post: &PostFilters,
) -> Vec<Procedure> {
    records
        .iter()
        .filter(|proc| {
            contains_ci(&proc.title, title)
                && contains_ci(&proc.cid, &post.cid)
                && contains_ci(&proc.sid, &post.sid)
                && contains_ci(&proc.pid, &post.pid)
                && contains_ci(&proc.account_name, &post.account_name)
                && (category.is_empty() || proc.category == category)
                && (post.relationship_manager.is_empty()
                    || proc.relationship_manager == post.relationship_manager)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::generate_procedures;

    #[test]
    fn test_identity_when_all_constraints_empty() {
        let batch = generate_procedures(80);
        let filtered = filter_procedures(&batch, "", "", &PostFilters::default());
        assert_eq!(filtered, batch);
    }

    #[test]
    fn test_output_is_ordered_subset_of_input() {
        let batch = generate_procedures(80);
        let filters = PostFilters {
            cid: "CID-207".to_string(),
            ..PostFilters::default()
        };
        let filtered = filter_procedures(&batch, "", "", &filters);
        assert_eq!(filtered.len(), 10);
        // Every output record exists in the input, in the input's order.
        let mut input_iter = batch.iter();
        for proc in &filtered {
            assert!(input_iter.any(|p| p == proc));
        }
    }

    #[test]
    fn test_title_substring_is_case_insensitive() {
        let batch = generate_procedures(80);
        let lower = filter_procedures(&batch, "compliance", "", &PostFilters::default());
        let upper = filter_procedures(&batch, "COMPLIANCE", "", &PostFilters::default());
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
        assert!(
            lower
                .iter()
                .all(|p| p.title.to_lowercase().contains("compliance"))
        );
    }

    #[test]
    fn test_account_name_substring_scenario() {
        // Accounts run from "Global Enterprise 100" to "Global Enterprise 179";
        // the substring "Global Enterprise 10" matches exactly 100-109.
        let batch = generate_procedures(80);
        let filters = PostFilters {
            account_name: "global enterprise 10".to_string(),
            ..PostFilters::default()
        };
        let filtered = filter_procedures(&batch, "", "", &filters);
        assert_eq!(filtered.len(), 10);
        for (i, proc) in filtered.iter().enumerate() {
            assert_eq!(proc.account_name, format!("Global Enterprise {}", 100 + i));
        }
    }

    #[test]
    fn test_category_matches_by_exact_equality() {
        let batch = generate_procedures(80);
        let filtered = filter_procedures(&batch, "", "Compliance", &PostFilters::default());
        // Indices 0, 6, 12, ... 78 out of 80.
        assert_eq!(filtered.len(), 14);
        assert!(filtered.iter().all(|p| p.category == "Compliance"));

        // A category prefix is not a match: equality, not containment.
        let partial = filter_procedures(&batch, "", "Compli", &PostFilters::default());
        assert!(partial.is_empty());
    }

    #[test]
    fn test_manager_matches_by_exact_equality() {
        let batch = generate_procedures(80);
        let filters = PostFilters {
            relationship_manager: "Michael Chen".to_string(),
            ..PostFilters::default()
        };
        let filtered = filter_procedures(&batch, "", "", &filters);
        assert_eq!(filtered.len(), 16);
        assert!(
            filtered
                .iter()
                .all(|p| p.relationship_manager == "Michael Chen")
        );

        let partial = PostFilters {
            relationship_manager: "Michael".to_string(),
            ..PostFilters::default()
        };
        assert!(filter_procedures(&batch, "", "", &partial).is_empty());
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let batch = generate_procedures(80);
        let filters = PostFilters {
            account_name: "Global Enterprise 10".to_string(),
            ..PostFilters::default()
        };
        let filtered = filter_procedures(&batch, "", "Compliance", &filters);
        // Accounts 100-109 crossed with category indices 0 and 6.
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == "Compliance"));
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let batch = generate_procedures(80);
        let filtered = filter_procedures(&batch, "zzz-no-such-title", "", &PostFilters::default());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_is_active() {
        let mut filters = PostFilters::default();
        assert!(!filters.is_active());
        filters.pid = "PID-5".to_string();
        assert!(filters.is_active());
    }
}
