//! Query cache for API responses
//!
//! Views read through [`QueryCache::fetch`] and get a [`QueryState`] back:
//! data, an error flag, or neither while nothing has been fetched. The
//! lifecycle derivations take their `todo_summary` and `todo_error` inputs
//! straight from such a state.

mod cache;
mod key;
mod state;

pub use cache::{QueryCache, QueryOptions};
pub use key::QueryKey;
pub use state::QueryState;
