//! Todo list display formatting

use crate::models::{TodoItem, TodoItemKind, TodoList};

use super::format::{format_amount, format_progress_bar, truncate};

/// Format a budget's todo list with a progress footer
pub fn format_todo_list(list: &TodoList, symbol: &str) -> String {
    if list.items.is_empty() {
        return "Nothing to do for this budget.".to_string();
    }

    let summary = list.summary();
    let mut output = format_todo_items(&list.items, symbol);
    output.push_str(&format!(
        "\n{} done, {} pending  {}\n",
        summary.completed_items,
        summary.pending_items,
        format_progress_bar(summary.completed_items, summary.total_items, 20)
    ));
    output
}

/// One row per item: checkbox, id, kind, name, amount and accounts
pub fn format_todo_items(items: &[TodoItem], symbol: &str) -> String {
    let mut output = String::new();

    for item in items {
        let check = if item.is_completed() { "[x]" } else { "[ ]" };
        let kind = match item.kind {
            TodoItemKind::Payment => "Payment",
            TodoItemKind::Transfer => "Transfer",
        };

        output.push_str(&format!(
            "  {} {:<14}  {:<8}  {:<28}  {:>12}",
            check,
            item.id.to_string(),
            kind,
            truncate(&item.name, 28),
            format_amount(item.amount, symbol),
        ));

        match (item.from_account_id, item.to_account_id) {
            (Some(from), Some(to)) => output.push_str(&format!("  {} -> {}", from, to)),
            (Some(from), None) => output.push_str(&format!("  from {}", from)),
            (None, Some(to)) => output.push_str(&format!("  to {}", to)),
            (None, None) => {}
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, BudgetId};

    #[test]
    fn test_empty_list() {
        let list = TodoList::new(BudgetId::new());
        assert_eq!(format_todo_list(&list, "$"), "Nothing to do for this budget.");
    }

    #[test]
    fn test_list_with_progress() {
        let budget_id = BudgetId::new();
        let mut list = TodoList::new(budget_id);
        list.items.push(TodoItem::payment(budget_id, "Rent", 1500.0));
        let (from, to) = (AccountId::new(), AccountId::new());
        list.items
            .push(TodoItem::transfer(budget_id, "Rainy day", 300.0, from, to));
        list.items[0].toggle();

        let output = format_todo_list(&list, "$");
        assert!(output.contains("[x]"));
        assert!(output.contains("[ ]"));
        assert!(output.contains("$1500.00"));
        assert!(output.contains(&format!("{} -> {}", from, to)));
        assert!(output.contains("1 done, 1 pending"));
    }
}
