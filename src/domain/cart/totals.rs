use serde::Serialize;

use super::aggregator::CartLine;

// ============================================================================
// Checkout Totals
// ============================================================================
//
// All amounts are integer currency units. Tax is computed on the subtotal
// with round-half-up; the rate comes from configuration, never from call
// sites.
//
// ============================================================================

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

impl Totals {
    /// Compute totals over `(unit_price, quantity)` pairs.
    pub fn compute<I>(items: I, tax_rate_percent: u32) -> Self
    where
        I: IntoIterator<Item = (i64, u32)>,
    {
        let subtotal: i64 = items
            .into_iter()
            .map(|(price, quantity)| price * i64::from(quantity))
            .sum();
        let tax = round_half_up_percent(subtotal, tax_rate_percent);

        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Totals for a grouped cart.
pub fn compute_totals(lines: &[CartLine], tax_rate_percent: u32) -> Totals {
    Totals::compute(
        lines.iter().map(|l| (l.product.price, l.quantity)),
        tax_rate_percent,
    )
}

/// `round(amount * percent / 100)` with half-up rounding, in integer
/// arithmetic. Amounts are non-negative.
fn round_half_up_percent(amount: i64, percent: u32) -> i64 {
    (amount * i64::from(percent) + 50) / 100
}
