//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::models::{check_non_negative, check_target_margin, check_warranty_years, PricingInput};

/// Request to calculate a warranty price.
///
/// Fields are optional at the serde level so a missing field produces a
/// validation message instead of a bare deserialization failure. Unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePricingRequest {
    #[serde(default)]
    pub product_cost: Option<f64>,
    #[serde(default)]
    pub warranty_years: Option<f64>,
    #[serde(default)]
    pub annual_failure_rate: Option<f64>,
    #[serde(default)]
    pub service_cost_per_claim: Option<f64>,
    #[serde(default)]
    pub target_margin_pct: Option<f64>,
}

impl CalculatePricingRequest {
    /// Check every field and build a `PricingInput`.
    pub fn validate(&self) -> Result<PricingInput, ValidationError> {
        let mut errors = Vec::new();

        let product_cost = amount_field("productCost", self.product_cost, &mut errors);
        let warranty_years = years_field(self.warranty_years, &mut errors);
        let annual_failure_rate =
            amount_field("annualFailureRate", self.annual_failure_rate, &mut errors);
        let service_cost_per_claim =
            amount_field("serviceCostPerClaim", self.service_cost_per_claim, &mut errors);
        let target_margin_pct = margin_field(self.target_margin_pct, &mut errors);

        match (
            product_cost,
            warranty_years,
            annual_failure_rate,
            service_cost_per_claim,
            target_margin_pct,
        ) {
            (Some(cost), Some(years), Some(rate), Some(service), Some(margin))
                if errors.is_empty() =>
            {
                PricingInput::new(cost, years, rate, service, margin)
            }
            _ => Err(ValidationError::from_messages(errors)),
        }
    }
}

fn decimal_field(field: &str, value: Option<f64>, errors: &mut Vec<String>) -> Option<Decimal> {
    let Some(value) = value else {
        errors.push(format!("{} is required", field));
        return None;
    };
    match Decimal::try_from(value) {
        Ok(d) if value.is_finite() => Some(d),
        _ => {
            errors.push(format!("{} is out of range", field));
            None
        }
    }
}

fn amount_field(field: &str, value: Option<f64>, errors: &mut Vec<String>) -> Option<Decimal> {
    let value = decimal_field(field, value, errors)?;
    match check_non_negative(field, value) {
        Some(message) => {
            errors.push(message);
            None
        }
        None => Some(value),
    }
}

fn margin_field(value: Option<f64>, errors: &mut Vec<String>) -> Option<Decimal> {
    let value = decimal_field("targetMarginPct", value, errors)?;
    match check_target_margin(value) {
        Some(message) => {
            errors.push(message);
            None
        }
        None => Some(value),
    }
}

fn years_field(value: Option<f64>, errors: &mut Vec<String>) -> Option<u32> {
    let Some(value) = value else {
        errors.push("warrantyYears is required".to_string());
        return None;
    };
    if !value.is_finite() || value.fract() != 0.0 {
        errors.push("warrantyYears must be a whole number".to_string());
        return None;
    }
    if value < 1.0 {
        errors.extend(check_warranty_years(0));
        return None;
    }
    if value > f64::from(u32::MAX) {
        errors.push("warrantyYears is out of range".to_string());
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CalculatePricingRequest {
        serde_json::from_value(value).unwrap()
    }

    fn reference() -> serde_json::Value {
        json!({
            "productCost": 500,
            "warrantyYears": 2,
            "annualFailureRate": 0.05,
            "serviceCostPerClaim": 120,
            "targetMarginPct": 0.3
        })
    }

    #[test]
    fn test_validate_reference_request() {
        let input = parse(reference()).validate().unwrap();
        assert_eq!(input.product_cost(), dec!(500));
        assert_eq!(input.warranty_years(), 2);
        assert_eq!(input.service_cost_per_claim(), dec!(120));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut body = reference();
        body["productName"] = json!("Ultrasound Probe");
        body["currency"] = json!("AUD");
        assert!(parse(body).validate().is_ok());
    }

    #[test]
    fn test_missing_field_reported() {
        let mut body = reference();
        body.as_object_mut().unwrap().remove("productCost");
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "productCost is required");
    }

    #[test]
    fn test_null_field_treated_as_missing() {
        let mut body = reference();
        body["targetMarginPct"] = json!(null);
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "targetMarginPct is required");
    }

    #[test]
    fn test_wrong_type_fails_deserialization() {
        let mut body = reference();
        body["warrantyYears"] = json!("two");
        assert!(serde_json::from_value::<CalculatePricingRequest>(body).is_err());
    }

    #[test]
    fn test_negative_warranty_years_rejected() {
        let mut body = reference();
        body["warrantyYears"] = json!(-1);
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "warrantyYears must be at least 1");
    }

    #[test]
    fn test_fractional_warranty_years_rejected() {
        let mut body = reference();
        body["warrantyYears"] = json!(2.5);
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "warrantyYears must be a whole number");
    }

    #[test]
    fn test_integral_float_warranty_years_accepted() {
        let mut body = reference();
        body["warrantyYears"] = json!(3.0);
        assert_eq!(parse(body).validate().unwrap().warranty_years(), 3);
    }

    #[test]
    fn test_margin_boundaries() {
        let mut body = reference();
        body["targetMarginPct"] = json!(0.95);
        assert!(parse(body.clone()).validate().is_ok());

        body["targetMarginPct"] = json!(0.96);
        assert!(parse(body).validate().is_err());
    }

    #[test]
    fn test_every_bad_field_reported() {
        let body = json!({
            "productCost": -1,
            "warrantyYears": 0,
            "annualFailureRate": -0.1,
            "targetMarginPct": 1.2
        });
        let err = parse(body).validate().unwrap_err();
        assert_eq!(
            err.messages(),
            &[
                "productCost must be non-negative".to_string(),
                "warrantyYears must be at least 1".to_string(),
                "annualFailureRate must be non-negative".to_string(),
                "serviceCostPerClaim is required".to_string(),
                "targetMarginPct must be between 0 and 0.95".to_string(),
            ]
        );
    }

    #[test]
    fn test_unrepresentable_amount_rejected() {
        let mut body = reference();
        body["serviceCostPerClaim"] = json!(1e300);
        let err = parse(body).validate().unwrap_err();
        assert_eq!(err.to_string(), "serviceCostPerClaim is out of range");
    }
}
