//! Lifecycle stage of a budget card in the budgets list
//!
//! Cards only carry the figure they show. The variant set is independent
//! of the detail view: an unlocked card has no "empty" stage, so a new
//! budget with all-zero totals shows up as balanced.

use serde::Serialize;

use super::balance::is_balanced;
use super::resolve::resolve_locked_state;
use crate::models::{BudgetTotals, TodoListSummary};

/// Stage of a budget as shown on its summary card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum CardLifecycleState {
    DraftBalanced { balance: f64 },
    DraftUnbalanced { balance: f64 },
    LockedErrorFallback { balance: f64 },
    LockedInProgress { completed: u32, total: u32 },
    LockedComplete { savings_rate: i64 },
}

impl CardLifecycleState {
    /// Stage name, e.g. `draft-unbalanced`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DraftBalanced { .. } => "draft-balanced",
            Self::DraftUnbalanced { .. } => "draft-unbalanced",
            Self::LockedErrorFallback { .. } => "locked-error-fallback",
            Self::LockedInProgress { .. } => "locked-in-progress",
            Self::LockedComplete { .. } => "locked-complete",
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

/// Derive the card stage of a budget
///
/// Returns `None` while a locked budget's todo summary is still loading.
pub fn derive_card_lifecycle_state(
    totals: &BudgetTotals,
    is_locked: bool,
    todo_summary: Option<&TodoListSummary>,
    todo_error: bool,
) -> Option<CardLifecycleState> {
    let balance = totals.balance;

    if !is_locked {
        return Some(if is_balanced(balance) {
            CardLifecycleState::DraftBalanced { balance }
        } else {
            CardLifecycleState::DraftUnbalanced { balance }
        });
    }

    let Some(summary) = todo_summary else {
        return todo_error.then_some(CardLifecycleState::LockedErrorFallback { balance });
    };

    let resolved = resolve_locked_state(totals, summary);
    Some(if resolved.is_complete {
        CardLifecycleState::LockedComplete {
            savings_rate: resolved.savings_rate,
        }
    } else {
        CardLifecycleState::LockedInProgress {
            completed: resolved.completed,
            total: resolved.total,
        }
    })
}
