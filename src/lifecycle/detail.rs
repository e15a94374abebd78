//! Lifecycle stage of the budget detail view

use serde::Serialize;

use super::balance::is_balanced;
use super::resolve::resolve_locked_state;
use crate::models::{BudgetTotals, TodoListSummary};

/// Stage of a budget as shown on its detail page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum DetailLifecycleState {
    /// Draft without a single line item
    DraftEmpty,
    /// Draft whose balance is not yet zero
    DraftBuilding { totals: BudgetTotals },
    /// Draft with every unit of income assigned
    DraftBalanced { totals: BudgetTotals },
    /// Locked, but the todo list could not be fetched
    LockedErrorFallback { totals: BudgetTotals },
    /// Locked with todo items still open
    LockedInProgress {
        totals: BudgetTotals,
        completed: u32,
        total: u32,
    },
    /// Locked and every todo item done
    LockedComplete {
        totals: BudgetTotals,
        savings_rate: i64,
        expense_rate: i64,
    },
}

impl DetailLifecycleState {
    /// Stage name, e.g. `draft-balanced`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DraftEmpty => "draft-empty",
            Self::DraftBuilding { .. } => "draft-building",
            Self::DraftBalanced { .. } => "draft-balanced",
            Self::LockedErrorFallback { .. } => "locked-error-fallback",
            Self::LockedInProgress { .. } => "locked-in-progress",
            Self::LockedComplete { .. } => "locked-complete",
        }
    }

    /// Totals carried by the stage; `DraftEmpty` has none
    pub fn totals(&self) -> Option<&BudgetTotals> {
        match self {
            Self::DraftEmpty => None,
            Self::DraftBuilding { totals }
            | Self::DraftBalanced { totals }
            | Self::LockedErrorFallback { totals }
            | Self::LockedInProgress { totals, .. }
            | Self::LockedComplete { totals, .. } => Some(totals),
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            Self::LockedErrorFallback { .. }
                | Self::LockedInProgress { .. }
                | Self::LockedComplete { .. }
        )
    }
}

/// Derive the detail view stage of a budget
///
/// Returns `None` while a locked budget's todo summary is still loading.
/// A present summary always wins over `todo_error`.
pub fn derive_detail_lifecycle_state(
    totals: &BudgetTotals,
    is_locked: bool,
    has_items: bool,
    todo_summary: Option<&TodoListSummary>,
    todo_error: bool,
) -> Option<DetailLifecycleState> {
    if !is_locked {
        let state = if !has_items {
            DetailLifecycleState::DraftEmpty
        } else if is_balanced(totals.balance) {
            DetailLifecycleState::DraftBalanced { totals: *totals }
        } else {
            DetailLifecycleState::DraftBuilding { totals: *totals }
        };
        return Some(state);
    }

    let Some(summary) = todo_summary else {
        return todo_error.then_some(DetailLifecycleState::LockedErrorFallback { totals: *totals });
    };

    let resolved = resolve_locked_state(totals, summary);
    if resolved.is_complete {
        Some(DetailLifecycleState::LockedComplete {
            totals: *totals,
            savings_rate: resolved.savings_rate,
            expense_rate: resolved.expense_rate,
        })
    } else {
        Some(DetailLifecycleState::LockedInProgress {
            totals: *totals,
            completed: resolved.completed,
            total: resolved.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> BudgetTotals {
        BudgetTotals::new(50000.0, 30000.0, 10000.0, 10000.0)
    }

    #[test]
    fn test_draft_empty() {
        let state = derive_detail_lifecycle_state(&BudgetTotals::zero(), false, false, None, false);
        assert_eq!(state, Some(DetailLifecycleState::DraftEmpty));
    }

    #[test]
    fn test_draft_empty_ignores_balance() {
        // has_items decides emptiness, not the figures
        let totals = BudgetTotals::new(0.0, 0.0, 0.0, 42.0);
        let state = derive_detail_lifecycle_state(&totals, false, false, None, false);
        assert_eq!(state, Some(DetailLifecycleState::DraftEmpty));
    }

    #[test]
    fn test_draft_building() {
        let totals = populated();
        let state = derive_detail_lifecycle_state(&totals, false, true, None, false);
        assert_eq!(state, Some(DetailLifecycleState::DraftBuilding { totals }));
    }

    #[test]
    fn test_draft_balanced_within_epsilon() {
        let totals = BudgetTotals::new(50000.0, 30000.0, 19999.995, 0.005);
        let state = derive_detail_lifecycle_state(&totals, false, true, None, false).unwrap();
        assert_eq!(state.kind(), "draft-balanced");
        assert_eq!(state.totals(), Some(&totals));
    }

    #[test]
    fn test_balance_is_not_recomputed() {
        // Figures say 10000 left over, but the reported balance is settled
        let totals = BudgetTotals::new(50000.0, 30000.0, 10000.0, 0.0);
        let state = derive_detail_lifecycle_state(&totals, false, true, None, false).unwrap();
        assert_eq!(state.kind(), "draft-balanced");
    }

    #[test]
    fn test_draft_ignores_todo_inputs() {
        let summary = TodoListSummary::new(5, 3, 2);
        let state =
            derive_detail_lifecycle_state(&populated(), false, true, Some(&summary), true).unwrap();
        assert_eq!(state.kind(), "draft-building");
    }

    #[test]
    fn test_locked_loading() {
        let state = derive_detail_lifecycle_state(&populated(), true, true, None, false);
        assert_eq!(state, None);
    }

    #[test]
    fn test_locked_error_fallback() {
        let totals = populated();
        let state = derive_detail_lifecycle_state(&totals, true, true, None, true);
        assert_eq!(state, Some(DetailLifecycleState::LockedErrorFallback { totals }));
    }

    #[test]
    fn test_summary_wins_over_error() {
        let summary = TodoListSummary::new(5, 3, 2);
        let state =
            derive_detail_lifecycle_state(&populated(), true, true, Some(&summary), true).unwrap();
        assert_eq!(state.kind(), "locked-in-progress");
    }

    #[test]
    fn test_locked_in_progress() {
        let totals = populated();
        let summary = TodoListSummary::new(5, 3, 2);
        let state = derive_detail_lifecycle_state(&totals, true, true, Some(&summary), false);
        assert_eq!(
            state,
            Some(DetailLifecycleState::LockedInProgress {
                totals,
                completed: 3,
                total: 5,
            })
        );
    }

    #[test]
    fn test_locked_complete() {
        let totals = BudgetTotals::from_amounts(50000.0, 35000.0, 15000.0);
        let summary = TodoListSummary::new(5, 5, 0);
        let state = derive_detail_lifecycle_state(&totals, true, true, Some(&summary), false);
        assert_eq!(
            state,
            Some(DetailLifecycleState::LockedComplete {
                totals,
                savings_rate: 30,
                expense_rate: 70,
            })
        );
    }

    #[test]
    fn test_empty_todo_list_is_complete() {
        let summary = TodoListSummary::new(0, 0, 0);
        let state =
            derive_detail_lifecycle_state(&populated(), true, true, Some(&summary), false).unwrap();
        assert_eq!(state.kind(), "locked-complete");
    }

    #[test]
    fn test_locked_complete_without_income() {
        let totals = BudgetTotals::zero();
        let summary = TodoListSummary::new(1, 1, 0);
        let state = derive_detail_lifecycle_state(&totals, true, false, Some(&summary), false);
        assert_eq!(
            state,
            Some(DetailLifecycleState::LockedComplete {
                totals,
                savings_rate: 0,
                expense_rate: 0,
            })
        );
    }

    #[test]
    fn test_is_locked() {
        assert!(!DetailLifecycleState::DraftEmpty.is_locked());
        assert!(DetailLifecycleState::LockedErrorFallback { totals: populated() }.is_locked());
    }

    #[test]
    fn test_serialized_shape() {
        let state = DetailLifecycleState::LockedComplete {
            totals: BudgetTotals::from_amounts(50000.0, 35000.0, 15000.0),
            savings_rate: 30,
            expense_rate: 70,
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["type"], "locked-complete");
        assert_eq!(json["savingsRate"], 30);
        assert_eq!(json["expenseRate"], 70);
        assert_eq!(json["totals"]["income"], 50000.0);

        let json = serde_json::to_value(DetailLifecycleState::DraftEmpty).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "draft-empty" }));
    }
}
