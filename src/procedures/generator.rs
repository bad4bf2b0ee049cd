//! Synthetic procedure dataset generator and mock search backend.
//!
//! Derives records formulaically by index so that generated batches are
//! stable and testable. The search function is a replaceable stub: a real
//! backend would take the submitted condition list and return matching
//! records, while this one ignores the query entirely.

use crate::procedures::models::{Procedure, ProcedureStatus};
use crate::query::ConditionList;
use chrono::NaiveDate;
use std::time::Duration;

/// Fixed list of procedure categories, cycled while generating.
pub const CATEGORIES: [&str; 6] = [
    "Compliance",
    "Risk Assessment",
    "Client Onboarding",
    "Internal Audit",
    "Operations",
    "Tax Reporting",
];

/// Fixed list of relationship managers, cycled while generating.
pub const MANAGERS: [&str; 5] = [
    "Sarah Jenkins",
    "Michael Chen",
    "Elena Rodriguez",
    "David Smith",
    "Jessica Wu",
];

/// Generate a batch of synthetic procedure records.
///
/// # Arguments
/// * `count` - Number of records to generate
///
/// # Returns
/// * `Vec<Procedure>` - Exactly `count` records, derived by index
///
/// # Details
/// Identifiers are prefix+offset formulas (CID-2000+i, PID-5000+i,
/// SID-8000+i), categories, managers, and statuses rotate through fixed
/// lists, dates cycle through January 2024, and completion lands in [45,99].
pub fn generate_procedures(count: usize) -> Vec<Procedure> {
    (0..count).map(build_procedure).collect()
}

fn build_procedure(i: usize) -> Procedure {
    let category = CATEGORIES[i % CATEGORIES.len()];
    Procedure {
        id: format!("proc-{i}"),
        title: format!("{category} Protocol v{}.2", (i % 5) + 1),
        account_name: format!("Global Enterprise {}", 100 + i),
        cid: format!("CID-{}", 2000 + i),
        pid: format!("PID-{}", 5000 + i),
        sid: format!("SID-{}", 8000 + i),
        category: category.to_string(),
        relationship_manager: MANAGERS[i % MANAGERS.len()].to_string(),
        snippet: format!(
            "This procedure outlines the necessary steps for handling {} within the \
             account structure. It includes validation of CID {} and mapping to SID {}. \
             Ensure all stakeholders are notified.",
            category.to_lowercase(),
            2000 + i,
            8000 + i
        ),
        status: ProcedureStatus::ALL[i % ProcedureStatus::ALL.len()],
        // Day offset stays within January, so the date is always valid.
        last_updated: NaiveDate::from_ymd_opt(2024, 1, (1 + i % 30) as u32)
            .unwrap_or_default(),
        completion: (45 + i % 55) as u8,
    }
}

/// Execute a mock search against the procedure backend.
///
/// # Arguments
/// * `conditions` - Submitted condition list
/// * `delay` - Simulated backend latency
/// * `count` - Size of the returned batch
///
/// # Returns
/// * `Vec<Procedure>` - A freshly generated batch
///
/// # Details
/// Replaceable stub boundary: the submitted conditions are accepted but not
/// used to narrow the batch. Swap this function for a real backend call to
/// get condition-driven results.
pub async fn execute_search(
    _conditions: ConditionList,
    delay: Duration,
    count: usize,
) -> Vec<Procedure> {
    tokio::time::sleep(delay).await;
    generate_procedures(count)
}
