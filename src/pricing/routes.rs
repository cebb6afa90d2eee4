//! HTTP routes for the pricing API.

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use tracing::debug;

use crate::error::Result;
use crate::AppState;

use super::calculators::compute_pricing;
use super::requests::CalculatePricingRequest;
use super::responses::PricingResponse;

/// Pricing API routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/calc", post(calculate))
}

/// Calculate a suggested warranty price.
///
/// Body, content-type and field errors all surface as `400 {"error": ...}`.
pub async fn calculate(
    payload: std::result::Result<Json<CalculatePricingRequest>, JsonRejection>,
) -> Result<Json<PricingResponse>> {
    let Json(request) = payload?;
    let input = request.validate()?;
    let result = compute_pricing(&input);

    debug!(
        expected_claim_cost = %result.expected_claim_cost,
        suggested_price = %result.suggested_price,
        break_even_units = %result.break_even_units,
        "Calculated warranty pricing"
    );

    Ok(Json(PricingResponse::from(&result)))
}
