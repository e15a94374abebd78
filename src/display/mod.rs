//! Display formatting for terminal output
//!
//! Turns models and derived lifecycle stages into plain-text tables and
//! status blocks for the CLI.

pub mod account;
pub mod budget;
pub mod format;
pub mod lifecycle;
pub mod todo;

pub use account::{format_account_list, format_recurring_list};
pub use budget::{format_budget_cards, format_budget_detail};
pub use format::{format_amount, format_percentage, format_progress_bar};
pub use lifecycle::{format_card_state, format_detail_state};
pub use todo::format_todo_list;
