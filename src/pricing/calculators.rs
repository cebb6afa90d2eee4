//! Core pricing calculation functions.
//!
//! Pure functions for warranty pricing math - no I/O, no shared state.

use rust_decimal::prelude::*;

use super::models::{BreakEven, PricingInput, PricingResult};

/// Round to specified decimal places, with midpoints rounded away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use warranty_pricing_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_money(dec!(-2.345), 2), dec!(-2.35));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Price that keeps `target_margin` of itself above the expected claim cost.
///
/// A margin of 1 or more leaves nothing to divide by, so the unmarked-up cost
/// is returned instead. Saturates at `Decimal::MAX` when the margin is so close
/// to 1 that the quotient is not representable.
pub fn suggested_price(expected_claim_cost: Decimal, target_margin: Decimal) -> Decimal {
    let denom = Decimal::ONE - target_margin;
    if denom <= Decimal::ZERO {
        return round_money(expected_claim_cost, 2);
    }
    let price = expected_claim_cost
        .checked_div(denom)
        .unwrap_or(Decimal::MAX);
    round_money(price, 2)
}

/// Units needed for the per-unit contribution to cover `fixed_costs`.
pub fn break_even_units(
    suggested_price: Decimal,
    expected_claim_cost: Decimal,
    fixed_costs: Decimal,
) -> BreakEven {
    let contribution = suggested_price - expected_claim_cost;
    if contribution <= Decimal::ZERO {
        return BreakEven::Unbounded;
    }
    match fixed_costs.checked_div(contribution) {
        Some(units) => BreakEven::Units(round_money(units, 2)),
        None => BreakEven::Unbounded,
    }
}

/// Calculate warranty pricing with no fixed costs.
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    compute_pricing_with_fixed_costs(input, Decimal::ZERO)
}

/// Calculate warranty pricing, spreading `fixed_costs` over the break-even
/// volume.
///
/// Total for any `PricingInput`: construction already rejected inputs whose
/// claim cost would overflow.
pub fn compute_pricing_with_fixed_costs(
    input: &PricingInput,
    fixed_costs: Decimal,
) -> PricingResult {
    let expected_claim_cost = round_money(
        input.annual_failure_rate()
            * Decimal::from(input.warranty_years())
            * input.service_cost_per_claim(),
        2,
    );
    let suggested_price = suggested_price(expected_claim_cost, input.target_margin_pct());
    let break_even_units = break_even_units(suggested_price, expected_claim_cost, fixed_costs);

    PricingResult {
        expected_claim_cost,
        suggested_price,
        break_even_units,
    }
}
