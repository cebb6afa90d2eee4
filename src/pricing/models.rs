//! Pricing domain models.
//!
//! `PricingInput` can only be built through `PricingInput::new`, so holding one
//! means every range check has already passed.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ValidationError;

/// Highest accepted target margin (95%).
pub const MAX_TARGET_MARGIN: Decimal = dec!(0.95);

/// Validated inputs for a warranty pricing calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingInput {
    product_cost: Decimal,
    warranty_years: u32,
    annual_failure_rate: Decimal,
    service_cost_per_claim: Decimal,
    target_margin_pct: Decimal,
}

impl PricingInput {
    /// Validate and build pricing inputs.
    ///
    /// Every field is checked and all failures are reported together. Inputs
    /// whose expected claim cost (or its marked-up price) would not fit in a
    /// `Decimal` are rejected as well, which keeps the calculators total.
    pub fn new(
        product_cost: Decimal,
        warranty_years: u32,
        annual_failure_rate: Decimal,
        service_cost_per_claim: Decimal,
        target_margin_pct: Decimal,
    ) -> Result<Self, ValidationError> {
        let mut errors: Vec<String> = [
            check_non_negative("productCost", product_cost),
            check_warranty_years(warranty_years),
            check_non_negative("annualFailureRate", annual_failure_rate),
            check_non_negative("serviceCostPerClaim", service_cost_per_claim),
            check_target_margin(target_margin_pct),
        ]
        .into_iter()
        .flatten()
        .collect();

        let input = Self {
            product_cost,
            warranty_years,
            annual_failure_rate,
            service_cost_per_claim,
            target_margin_pct,
        };

        if errors.is_empty() && !input.fits_decimal_range() {
            errors.push("expected claim cost is too large to compute".to_string());
        }

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(ValidationError::from_messages(errors))
        }
    }

    pub fn product_cost(&self) -> Decimal {
        self.product_cost
    }

    pub fn warranty_years(&self) -> u32 {
        self.warranty_years
    }

    pub fn annual_failure_rate(&self) -> Decimal {
        self.annual_failure_rate
    }

    pub fn service_cost_per_claim(&self) -> Decimal {
        self.service_cost_per_claim
    }

    pub fn target_margin_pct(&self) -> Decimal {
        self.target_margin_pct
    }

    fn fits_decimal_range(&self) -> bool {
        let denom = Decimal::ONE - self.target_margin_pct;
        self.annual_failure_rate
            .checked_mul(Decimal::from(self.warranty_years))
            .and_then(|v| v.checked_mul(self.service_cost_per_claim))
            .and_then(|v| v.checked_div(denom))
            .is_some()
    }
}

pub(crate) fn check_non_negative(field: &str, value: Decimal) -> Option<String> {
    if value < Decimal::ZERO {
        Some(format!("{} must be non-negative", field))
    } else {
        None
    }
}

pub(crate) fn check_warranty_years(years: u32) -> Option<String> {
    if years < 1 {
        Some("warrantyYears must be at least 1".to_string())
    } else {
        None
    }
}

pub(crate) fn check_target_margin(value: Decimal) -> Option<String> {
    if value < Decimal::ZERO || value > MAX_TARGET_MARGIN {
        Some(format!(
            "targetMarginPct must be between 0 and {}",
            MAX_TARGET_MARGIN
        ))
    } else {
        None
    }
}

/// Break-even volume for a warranty price.
///
/// `Unbounded` means the price earns no contribution per unit, so no volume
/// ever recovers fixed costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    Units(Decimal),
    Unbounded,
}

impl BreakEven {
    pub fn units(&self) -> Option<Decimal> {
        match self {
            BreakEven::Units(units) => Some(*units),
            BreakEven::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, BreakEven::Unbounded)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Units(units) => write!(f, "{:.2}", units),
            BreakEven::Unbounded => f.write_str("N/A"),
        }
    }
}

/// Result of a warranty pricing calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingResult {
    pub expected_claim_cost: Decimal,
    pub suggested_price: Decimal,
    pub break_even_units: BreakEven,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(margin: Decimal) -> Result<PricingInput, ValidationError> {
        PricingInput::new(dec!(500), 2, dec!(0.05), dec!(120), margin)
    }

    #[test]
    fn test_valid_input_keeps_values() {
        let input = input(dec!(0.3)).unwrap();
        assert_eq!(input.product_cost(), dec!(500));
        assert_eq!(input.warranty_years(), 2);
        assert_eq!(input.annual_failure_rate(), dec!(0.05));
        assert_eq!(input.service_cost_per_claim(), dec!(120));
        assert_eq!(input.target_margin_pct(), dec!(0.3));
    }

    #[test]
    fn test_target_margin_boundaries() {
        assert!(input(dec!(0)).is_ok());
        assert!(input(dec!(0.95)).is_ok());

        let err = input(dec!(0.96)).unwrap_err();
        assert_eq!(err.to_string(), "targetMarginPct must be between 0 and 0.95");

        assert!(input(dec!(-0.01)).is_err());
    }

    #[test]
    fn test_warranty_years_boundaries() {
        let err = PricingInput::new(dec!(500), 0, dec!(0.05), dec!(120), dec!(0.3)).unwrap_err();
        assert_eq!(err.to_string(), "warrantyYears must be at least 1");

        assert!(PricingInput::new(dec!(500), 1, dec!(0.05), dec!(120), dec!(0.3)).is_ok());
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(PricingInput::new(dec!(-1), 2, dec!(0.05), dec!(120), dec!(0.3)).is_err());
        assert!(PricingInput::new(dec!(500), 2, dec!(-0.05), dec!(120), dec!(0.3)).is_err());
        assert!(PricingInput::new(dec!(500), 2, dec!(0.05), dec!(-120), dec!(0.3)).is_err());
    }

    #[test]
    fn test_zero_amounts_accepted() {
        assert!(PricingInput::new(dec!(0), 1, dec!(0), dec!(0), dec!(0)).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let err = PricingInput::new(dec!(-1), 0, dec!(0.05), dec!(-5), dec!(2)).unwrap_err();
        assert_eq!(
            err.messages(),
            &[
                "productCost must be non-negative".to_string(),
                "warrantyYears must be at least 1".to_string(),
                "serviceCostPerClaim must be non-negative".to_string(),
                "targetMarginPct must be between 0 and 0.95".to_string(),
            ]
        );
    }

    #[test]
    fn test_overflowing_claim_cost_rejected() {
        let err = PricingInput::new(dec!(0), 10, Decimal::MAX, dec!(2), dec!(0)).unwrap_err();
        assert_eq!(err.to_string(), "expected claim cost is too large to compute");
    }

    #[test]
    fn test_break_even_display() {
        assert_eq!(BreakEven::Units(dec!(0)).to_string(), "0.00");
        assert_eq!(BreakEven::Units(dec!(19.46)).to_string(), "19.46");
        assert_eq!(BreakEven::Unbounded.to_string(), "N/A");
        assert!(BreakEven::Unbounded.is_unbounded());
        assert_eq!(BreakEven::Unbounded.units(), None);
    }
}
