//! Rendering of budget lifecycle stages
//!
//! Every stage maps to one short status line for cards and a small block
//! for the detail view. `None` is rendered as a loading placeholder.

use crate::lifecycle::{CardLifecycleState, DetailLifecycleState};
use crate::models::BudgetTotals;

use super::format::{format_amount, format_percentage, format_progress_bar};

const PROGRESS_WIDTH: usize = 10;

/// Placeholder shown while a locked budget's todo list is loading
pub const LOADING: &str = "Loading todo list...";

/// One-line status of a budget card
pub fn format_card_state(state: Option<&CardLifecycleState>, symbol: &str) -> String {
    let Some(state) = state else {
        return LOADING.to_string();
    };

    match *state {
        CardLifecycleState::DraftBalanced { .. } => "Draft, balanced".to_string(),
        CardLifecycleState::DraftUnbalanced { balance } => {
            format!("Draft, {}", describe_balance(balance, symbol))
        }
        CardLifecycleState::LockedErrorFallback { balance } => format!(
            "Locked, balance {} (todo list unavailable)",
            format_amount(balance, symbol)
        ),
        CardLifecycleState::LockedInProgress { completed, total } => format!(
            "Locked, {}",
            format_progress_bar(completed, total, PROGRESS_WIDTH)
        ),
        CardLifecycleState::LockedComplete { savings_rate } => {
            format!("Complete, {} saved", format_percentage(savings_rate))
        }
    }
}

/// Status block of the budget detail view
pub fn format_detail_state(state: Option<&DetailLifecycleState>, symbol: &str) -> String {
    let Some(state) = state else {
        return format!("Status: Locked\n{}\n", LOADING);
    };

    let mut output = String::new();
    match state {
        DetailLifecycleState::DraftEmpty => {
            output.push_str("Status: Draft (empty)\n");
            output.push_str("Add income, expense and savings lines to build this budget.\n");
        }
        DetailLifecycleState::DraftBuilding { totals } => {
            output.push_str("Status: Draft\n");
            output.push_str(&format_totals(totals, symbol));
            output.push_str(&format!("{}.\n", describe_balance(totals.balance, symbol)));
        }
        DetailLifecycleState::DraftBalanced { totals } => {
            output.push_str("Status: Draft (balanced)\n");
            output.push_str(&format_totals(totals, symbol));
            output.push_str(
                "Every unit of income is assigned. Lock the budget to get its todo list.\n",
            );
        }
        DetailLifecycleState::LockedErrorFallback { totals } => {
            output.push_str("Status: Locked\n");
            output.push_str(&format_totals(totals, symbol));
            output.push_str("The todo list could not be loaded.\n");
        }
        DetailLifecycleState::LockedInProgress {
            totals,
            completed,
            total,
        } => {
            output.push_str("Status: Locked\n");
            output.push_str(&format_totals(totals, symbol));
            output.push_str(&format!(
                "Todo:     {}\n",
                format_progress_bar(*completed, *total, PROGRESS_WIDTH)
            ));
        }
        DetailLifecycleState::LockedComplete {
            totals,
            savings_rate,
            expense_rate,
        } => {
            output.push_str("Status: Complete\n");
            output.push_str(&format_totals(totals, symbol));
            output.push_str(&format!(
                "Savings rate: {}  Expense rate: {}\n",
                format_percentage(*savings_rate),
                format_percentage(*expense_rate)
            ));
        }
    }
    output
}

fn format_totals(totals: &BudgetTotals, symbol: &str) -> String {
    format!(
        "Income:   {:>12}\nExpenses: {:>12}\nSavings:  {:>12}\nBalance:  {:>12}\n",
        format_amount(totals.income, symbol),
        format_amount(totals.expenses, symbol),
        format_amount(totals.savings, symbol),
        format_amount(totals.balance, symbol),
    )
}

fn describe_balance(balance: f64, symbol: &str) -> String {
    if balance > 0.0 {
        format!("{} left to assign", format_amount(balance, symbol))
    } else {
        format!("{} over-assigned", format_amount(-balance, symbol))
    }
}
