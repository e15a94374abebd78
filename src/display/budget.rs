//! Budget display formatting
//!
//! Formats the budgets list as a table of cards and a single budget as a
//! detail page with its line items grouped by section.

use std::fmt::Write;

use crate::models::{Budget, LineItemKind};
use crate::services::{BudgetCard, BudgetDetail};

use super::format::{format_amount, separator, truncate};
use super::lifecycle::{format_card_state, format_detail_state};
use super::todo::format_todo_items;

/// Format the budgets list as a table
pub fn format_budget_cards(cards: &[BudgetCard], symbol: &str) -> String {
    if cards.is_empty() {
        return "No budgets found. Create one with `budgetbook budget create`.".to_string();
    }

    let title_width = cards
        .iter()
        .map(|c| c.budget.title().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<title_width$}  {:>12}  {:>12}  {}\n",
        "ID",
        "Month",
        "Income",
        "Balance",
        "Status",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<title_width$}  {:->12}  {:->12}  {:-<24}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for card in cards {
        output.push_str(&format!(
            "{:<12}  {:<title_width$}  {:>12}  {:>12}  {}\n",
            card.budget.id.to_string(),
            card.budget.title(),
            format_amount(card.budget.totals.income, symbol),
            format_amount(card.budget.totals.balance, symbol),
            format_card_state(card.state.as_ref(), symbol),
            title_width = title_width,
        ));
    }

    output
}

/// Format the detail page of a budget
pub fn format_budget_detail(detail: &BudgetDetail, symbol: &str, date_format: &str) -> String {
    let budget = &detail.budget;
    let mut output = String::new();

    output.push_str(&format!("{}  ({})\n", budget.title(), budget.id));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format_detail_state(detail.state.as_ref(), symbol));

    for kind in [LineItemKind::Income, LineItemKind::Expense, LineItemKind::Savings] {
        output.push('\n');
        output.push_str(&format_line_items(budget, kind, symbol));
    }

    if let Some(list) = &detail.todo.data {
        output.push_str("\nTodo\n");
        output.push_str(&format_todo_items(&list.items, symbol));
    }

    if let Some(locked_at) = budget.locked_at {
        output.push_str("\nLocked ");
        // An invalid user format string makes chrono's formatter fail
        if write!(output, "{}", locked_at.format(date_format)).is_err() {
            output.push_str(&locked_at.date_naive().to_string());
        }
        output.push('\n');
    }

    output
}

fn format_line_items(budget: &Budget, kind: LineItemKind, symbol: &str) -> String {
    let items = budget.items(kind);
    let mut output = format!("{}\n", kind);

    if items.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    for item in items {
        let marker = if item.recurring_expense_id.is_some() {
            " (recurring)"
        } else {
            ""
        };
        output.push_str(&format!(
            "  {:<30}  {:>12}{}\n",
            truncate(&item.name, 30),
            format_amount(item.amount, symbol),
            marker,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{CardLifecycleState, DetailLifecycleState};
    use crate::models::LineItem;
    use crate::query::QueryState;

    fn draft() -> Budget {
        let mut budget = Budget::new(2026, 3);
        budget
            .add_line_item(LineItemKind::Income, LineItem::new("Salary", 4000.0))
            .unwrap();
        budget
            .add_line_item(LineItemKind::Expense, LineItem::new("Rent", 1500.0))
            .unwrap();
        budget
    }

    #[test]
    fn test_empty_cards() {
        assert!(format_budget_cards(&[], "$").contains("No budgets found"));
    }

    #[test]
    fn test_cards_table() {
        let budget = draft();
        let cards = vec![BudgetCard {
            state: Some(CardLifecycleState::DraftUnbalanced {
                balance: budget.totals.balance,
            }),
            budget,
        }];

        let output = format_budget_cards(&cards, "$");
        assert!(output.contains("March 2026"));
        assert!(output.contains("$4000.00"));
        assert!(output.contains("Draft, $2500.00 left to assign"));
    }

    #[test]
    fn test_detail_groups_items() {
        let budget = draft();
        let detail = BudgetDetail {
            state: Some(DetailLifecycleState::DraftBuilding {
                totals: budget.totals,
            }),
            budget,
            todo: QueryState::idle(),
        };

        let output = format_budget_detail(&detail, "$", "%Y-%m-%d");
        assert!(output.starts_with("March 2026"));
        assert!(output.contains("Income\n  Salary"));
        assert!(output.contains("Savings\n  (none)"));
        assert!(!output.contains("Todo\n"));
        assert!(!output.contains("Locked "));
    }

    #[test]
    fn test_detail_locked_date() {
        let mut budget = draft();
        budget.lock().unwrap();
        let locked_on = budget.locked_at.unwrap().format("%d/%m/%Y").to_string();
        let detail = BudgetDetail {
            state: None,
            budget,
            todo: QueryState::idle(),
        };

        let output = format_budget_detail(&detail, "$", "%d/%m/%Y");
        assert!(output.contains(&format!("Locked {}", locked_on)));
        assert!(output.contains("Loading todo list..."));
    }
}
