//! Service layer for budgetbook
//!
//! Services sit between the CLI and the API. They validate input, read
//! through the query cache, derive what the views show, and journal every
//! mutation to the activity log.

pub mod account;
pub mod budget;
pub mod recurring;
pub mod todo;

pub use account::AccountService;
pub use budget::{BudgetCard, BudgetDetail, BudgetService};
pub use recurring::RecurringService;
pub use todo::TodoService;
