//! Search condition list model.
//!
//! Manages the multi-clause query builder: an ordered list of up to three
//! conditions, each with an operator and a free-text value, joined by
//! AND/OR connectives.

use thiserror::Error;

/// Maximum number of conditions in a query.
pub const MAX_CONDITIONS: usize = 3;

/// Match operator for a single search condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperator {
    /// Substring match
    Contains,
    /// Exact match
    Equals,
    /// Negated substring match
    NotContains,
}

impl SearchOperator {
    /// Get the display label for this operator.
    ///
    /// # Returns
    /// * `&str` - Operator label
    pub fn label(&self) -> &'static str {
        match self {
            SearchOperator::Contains => "Contains",
            SearchOperator::Equals => "Equals",
            SearchOperator::NotContains => "Not Contains",
        }
    }

    /// Get the next operator in the cycle.
    ///
    /// # Returns
    /// * `SearchOperator` - Contains -> Equals -> Not Contains -> Contains
    pub fn next(self) -> Self {
        match self {
            SearchOperator::Contains => SearchOperator::Equals,
            SearchOperator::Equals => SearchOperator::NotContains,
            SearchOperator::NotContains => SearchOperator::Contains,
        }
    }
}

/// Connective joining two adjacent conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    /// Get the display label for this connective.
    pub fn label(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }

    /// Toggle between AND and OR.
    pub fn toggled(self) -> Self {
        match self {
            LogicalOperator::And => LogicalOperator::Or,
            LogicalOperator::Or => LogicalOperator::And,
        }
    }
}

/// One clause of the query builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    /// Identifier, unique within the list
    pub id: u64,
    /// Match operator
    pub operator: SearchOperator,
    /// Free-text search term
    pub value: String,
    /// Connective joining this condition onto the previous one.
    /// Never read for the first condition in the list.
    pub connective: Option<LogicalOperator>,
}

/// Validation failure for a condition list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionError {
    /// A condition has an empty (or whitespace-only) search term
    #[error("condition {} has an empty search term", .index + 1)]
    EmptyValue {
        /// Zero-based index of the offending condition
        index: usize,
    },
}

/// Ordered list of search conditions.
///
/// Always holds between one and [`MAX_CONDITIONS`] conditions.
#[derive(Debug, Clone)]
pub struct ConditionList {
    conditions: Vec<SearchCondition>,
    next_id: u64,
}

impl Default for ConditionList {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionList {
    /// Create a list holding a single default condition.
    ///
    /// # Returns
    /// * `ConditionList` - List with one empty Contains condition
    pub fn new() -> Self {
        Self {
            conditions: vec![SearchCondition {
                id: 0,
                operator: SearchOperator::Contains,
                value: String::new(),
                connective: None,
            }],
            next_id: 1,
        }
    }

    /// Get the conditions in order.
    pub fn conditions(&self) -> &[SearchCondition] {
        &self.conditions
    }

    /// Get the number of conditions.
    #[allow(clippy::len_without_is_empty)] // The list always holds at least one condition
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether another condition can be added.
    pub fn can_add(&self) -> bool {
        self.conditions.len() < MAX_CONDITIONS
    }

    /// Whether a condition can be removed.
    pub fn can_remove(&self) -> bool {
        self.conditions.len() > 1
    }

    /// Append a new default condition.
    ///
    /// # Details
    /// New conditions start as Contains with an empty value and an AND
    /// connective. Silently does nothing once the list holds
    /// [`MAX_CONDITIONS`] conditions.
    pub fn add(&mut self) {
        if !self.can_add() {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.conditions.push(SearchCondition {
            id,
            operator: SearchOperator::Contains,
            value: String::new(),
            connective: Some(LogicalOperator::And),
        });
    }

    /// Remove the condition with the given id.
    ///
    /// # Arguments
    /// * `id` - Condition identifier
    ///
    /// # Details
    /// No-op when the id is absent or when only one condition remains;
    /// the list never becomes empty.
    pub fn remove(&mut self, id: u64) {
        if !self.can_remove() {
            return;
        }
        self.conditions.retain(|c| c.id != id);
    }

    /// Set the search term of the condition with the given id.
    ///
    /// # Details
    /// No-op when the id is absent.
    #[allow(dead_code)] // Id-based updates back the condition row widgets' callbacks
    pub fn set_value(&mut self, id: u64, value: impl Into<String>) {
        if let Some(cond) = self.get_mut(id) {
            cond.value = value.into();
        }
    }

    /// Set the operator of the condition with the given id.
    #[allow(dead_code)] // Part of the id-based update contract alongside set_value
    pub fn set_operator(&mut self, id: u64, operator: SearchOperator) {
        if let Some(cond) = self.get_mut(id) {
            cond.operator = operator;
        }
    }

    /// Set the connective of the condition with the given id.
    #[allow(dead_code)] // Part of the id-based update contract alongside set_value
    pub fn set_connective(&mut self, id: u64, connective: LogicalOperator) {
        if let Some(cond) = self.get_mut(id) {
            cond.connective = Some(connective);
        }
    }

    /// Append a character to the value of the condition at `index`.
    pub fn push_value_char(&mut self, index: usize, ch: char) {
        if let Some(cond) = self.conditions.get_mut(index) {
            cond.value.push(ch);
        }
    }

    /// Remove the last character from the value of the condition at `index`.
    pub fn pop_value_char(&mut self, index: usize) {
        if let Some(cond) = self.conditions.get_mut(index) {
            cond.value.pop();
        }
    }

    /// Cycle the operator of the condition at `index`.
    pub fn cycle_operator(&mut self, index: usize) {
        if let Some(cond) = self.conditions.get_mut(index) {
            cond.operator = cond.operator.next();
        }
    }

    /// Toggle the AND/OR connective of the condition at `index`.
    ///
    /// # Details
    /// The first condition has no connective to toggle.
    pub fn toggle_connective(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        if let Some(cond) = self.conditions.get_mut(index) {
            let current = cond.connective.unwrap_or(LogicalOperator::And);
            cond.connective = Some(current.toggled());
        }
    }

    /// Remove the condition at `index`, honoring the minimum-length guard.
    pub fn remove_at(&mut self, index: usize) {
        if let Some(cond) = self.conditions.get(index) {
            self.remove(cond.id);
        }
    }

    /// Validate the list for search submission.
    ///
    /// # Returns
    /// * `Result<(), ConditionError>` - Ok when every condition has a
    ///   non-empty search term after trimming whitespace
    pub fn validate(&self) -> Result<(), ConditionError> {
        for (index, cond) in self.conditions.iter().enumerate() {
            if cond.value.trim().is_empty() {
                return Err(ConditionError::EmptyValue { index });
            }
        }
        Ok(())
    }

    /// Reset the list to a single default condition.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut SearchCondition> {
        self.conditions.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_has_one_condition() {
        let list = ConditionList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.conditions()[0].operator, SearchOperator::Contains);
        assert!(list.conditions()[0].value.is_empty());
        assert!(list.conditions()[0].connective.is_none());
    }

    #[test]
    fn test_add_is_capped_at_three() {
        let mut list = ConditionList::new();
        for _ in 0..5 {
            list.add();
        }
        assert_eq!(list.len(), 3);
        assert!(!list.can_add());
    }

    #[test]
    fn test_added_conditions_default_to_and() {
        let mut list = ConditionList::new();
        list.add();
        assert_eq!(list.conditions()[1].connective, Some(LogicalOperator::And));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = ConditionList::new();
        list.add();
        list.add();
        let ids: Vec<u64> = list.conditions().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut list = ConditionList::new();
        list.set_value(999, "audit");
        assert!(list.conditions()[0].value.is_empty());
    }

    #[test]
    fn test_set_value_and_operator() {
        let mut list = ConditionList::new();
        let id = list.conditions()[0].id;
        list.set_value(id, "compliance");
        list.set_operator(id, SearchOperator::Equals);
        assert_eq!(list.conditions()[0].value, "compliance");
        assert_eq!(list.conditions()[0].operator, SearchOperator::Equals);
    }

    #[test]
    fn test_remove_refused_at_length_one() {
        let mut list = ConditionList::new();
        let id = list.conditions()[0].id;
        list.remove(id);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = ConditionList::new();
        list.add();
        let second = list.conditions()[1].id;
        list.remove(second);
        assert_eq!(list.len(), 1);
        assert!(list.conditions().iter().all(|c| c.id != second));
    }

    #[test]
    fn test_toggle_connective_skips_first_row() {
        let mut list = ConditionList::new();
        list.add();
        list.toggle_connective(0);
        assert!(list.conditions()[0].connective.is_none());
        list.toggle_connective(1);
        assert_eq!(list.conditions()[1].connective, Some(LogicalOperator::Or));
        list.toggle_connective(1);
        assert_eq!(list.conditions()[1].connective, Some(LogicalOperator::And));
    }

    #[test]
    fn test_validate_rejects_whitespace_only_values() {
        let mut list = ConditionList::new();
        let id = list.conditions()[0].id;
        assert_eq!(list.validate(), Err(ConditionError::EmptyValue { index: 0 }));
        list.set_value(id, "   ");
        assert_eq!(list.validate(), Err(ConditionError::EmptyValue { index: 0 }));
        list.set_value(id, "kyc review");
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_offending_index() {
        let mut list = ConditionList::new();
        let first = list.conditions()[0].id;
        list.set_value(first, "risk");
        list.add();
        assert_eq!(list.validate(), Err(ConditionError::EmptyValue { index: 1 }));
    }

    #[test]
    fn test_operator_cycle() {
        assert_eq!(SearchOperator::Contains.next(), SearchOperator::Equals);
        assert_eq!(SearchOperator::Equals.next(), SearchOperator::NotContains);
        assert_eq!(SearchOperator::NotContains.next(), SearchOperator::Contains);
    }

    #[test]
    fn test_reset() {
        let mut list = ConditionList::new();
        list.add();
        list.add();
        list.reset();
        assert_eq!(list.len(), 1);
        assert!(list.conditions()[0].value.is_empty());
    }
}
