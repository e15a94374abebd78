//! Figures shared by every view of a locked budget

use crate::models::{BudgetTotals, TodoListSummary};

/// Completion and rate figures of a locked budget with a loaded todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLockedState {
    /// Every todo item is done, or there were none to begin with
    pub is_complete: bool,

    /// Savings as a whole percentage of income
    pub savings_rate: i64,

    /// Expenses as a whole percentage of income
    pub expense_rate: i64,

    pub completed: u32,
    pub total: u32,
}

/// Resolve the completion flag and income rates of a locked budget
///
/// Only meaningful once the budget is locked and its todo summary has been
/// fetched; callers handle the loading and error cases themselves.
pub fn resolve_locked_state(
    totals: &BudgetTotals,
    summary: &TodoListSummary,
) -> ResolvedLockedState {
    let is_complete =
        summary.total_items == 0 || summary.completed_items == summary.total_items;

    ResolvedLockedState {
        is_complete,
        savings_rate: percent_of_income(totals.savings, totals.income),
        expense_rate: percent_of_income(totals.expenses, totals.income),
        completed: summary.completed_items,
        total: summary.total_items,
    }
}

/// `round(amount / income * 100)`, or 0 when there is no income
///
/// Rounds half away from zero in both directions, so a savings rate of
/// -12.5% reports `-13`, not `-12`.
fn percent_of_income(amount: f64, income: f64) -> i64 {
    if income > 0.0 {
        (amount / income * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(income: f64, expenses: f64, savings: f64) -> BudgetTotals {
        BudgetTotals::from_amounts(income, expenses, savings)
    }

    #[test]
    fn test_savings_rate() {
        let resolved = resolve_locked_state(
            &totals(50000.0, 35000.0, 15000.0),
            &TodoListSummary::new(5, 5, 0),
        );
        assert_eq!(resolved.savings_rate, 30);
        assert_eq!(resolved.expense_rate, 70);
        assert!(resolved.is_complete);
    }

    #[test]
    fn test_zero_income_guard() {
        let resolved =
            resolve_locked_state(&totals(0.0, 300.0, 15000.0), &TodoListSummary::default());
        assert_eq!(resolved.savings_rate, 0);
        assert_eq!(resolved.expense_rate, 0);
    }

    #[test]
    fn test_negative_income_guard() {
        let resolved =
            resolve_locked_state(&totals(-100.0, 50.0, 50.0), &TodoListSummary::default());
        assert_eq!(resolved.savings_rate, 0);
        assert_eq!(resolved.expense_rate, 0);
    }

    #[test]
    fn test_rounding() {
        // 1/3 -> 33, 2/3 -> 67, 12.5 -> 13
        let resolved =
            resolve_locked_state(&totals(3.0, 2.0, 1.0), &TodoListSummary::default());
        assert_eq!(resolved.savings_rate, 33);
        assert_eq!(resolved.expense_rate, 67);

        let resolved =
            resolve_locked_state(&totals(1000.0, 0.0, 125.0), &TodoListSummary::default());
        assert_eq!(resolved.savings_rate, 13);
    }

    #[test]
    fn test_rounding_negative_half() {
        let resolved =
            resolve_locked_state(&totals(8.0, 1.0, -1.0), &TodoListSummary::default());
        assert_eq!(resolved.savings_rate, -13);
        assert_eq!(resolved.expense_rate, 13);
    }

    #[test]
    fn test_partial_progress() {
        let resolved = resolve_locked_state(
            &totals(50000.0, 30000.0, 10000.0),
            &TodoListSummary::new(5, 3, 2),
        );
        assert!(!resolved.is_complete);
        assert_eq!(resolved.completed, 3);
        assert_eq!(resolved.total, 5);
    }

    #[test]
    fn test_empty_list_is_complete() {
        let resolved = resolve_locked_state(
            &totals(50000.0, 30000.0, 10000.0),
            &TodoListSummary::new(0, 0, 0),
        );
        assert!(resolved.is_complete);
        assert_eq!(resolved.total, 0);
    }
}
