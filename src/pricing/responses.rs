//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::PricingResult;

/// Response for a warranty pricing calculation.
///
/// Amounts are JSON numbers. An unbounded break-even is written as `null`,
/// since JSON has no infinity literal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_claim_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub suggested_price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub break_even_units: Option<Decimal>,
}

impl From<&PricingResult> for PricingResponse {
    fn from(result: &PricingResult) -> Self {
        Self {
            expected_claim_cost: result.expected_claim_cost,
            suggested_price: result.suggested_price,
            break_even_units: result.break_even_units.units(),
        }
    }
}

/// Error body returned for any failed request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
