//! Budget lifecycle derivation
//!
//! Pure functions mapping already-fetched budget data to the stage a view
//! should render:
//!
//! - `is_balanced`: epsilon check on a budget balance
//! - `resolve_locked_state`: completion flag and income rates of a locked budget
//! - `derive_detail_lifecycle_state`: six-stage state of the detail page
//! - `derive_card_lifecycle_state`: five-stage state of a list card
//!
//! Both derivations return `None` while a locked budget's todo summary is
//! still loading. Nothing here does I/O or keeps state, so callers simply
//! re-derive whenever their inputs change.
//!
//! # Example
//!
//! ```
//! use budgetbook::lifecycle::{derive_card_lifecycle_state, CardLifecycleState};
//! use budgetbook::models::{BudgetTotals, TodoListSummary};
//!
//! let totals = BudgetTotals::from_amounts(50000.0, 35000.0, 15000.0);
//! let summary = TodoListSummary::new(5, 5, 0);
//!
//! let state = derive_card_lifecycle_state(&totals, true, Some(&summary), false);
//! assert_eq!(state, Some(CardLifecycleState::LockedComplete { savings_rate: 30 }));
//! ```

mod balance;
mod card;
mod detail;
mod resolve;

pub use balance::{is_balanced, BALANCE_EPSILON};
pub use card::{derive_card_lifecycle_state, CardLifecycleState};
pub use detail::{derive_detail_lifecycle_state, DetailLifecycleState};
pub use resolve::{resolve_locked_state, ResolvedLockedState};
