//! Monetary types for bet amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Wagered amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Render an amount with exactly two fraction digits.
///
/// Midpoints round away from zero, matching how the service's own UI
/// displays values (`1.005` renders as `1.01`, not `1.00`).
#[must_use]
pub fn format_amount(amount: Amount) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
