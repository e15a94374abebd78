//! Balance equality

/// One minor currency unit; balances closer to zero than this are settled
pub const BALANCE_EPSILON: f64 = 0.01;

/// Whether a budget balance is effectively zero
///
/// Absorbs floating point drift from summing many line items.
/// `0.01` itself is not balanced, and NaN never is.
pub fn is_balanced(balance: f64) -> bool {
    balance.abs() < BALANCE_EPSILON
}
