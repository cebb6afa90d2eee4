//! Server-rendered page handlers

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, Result, ValidationError};
use crate::pricing::calculators::compute_pricing;
use crate::pricing::models::PricingResult;
use crate::pricing::requests::CalculatePricingRequest;
use crate::routes::models::{acknowledge, SavedModelRequest};
use crate::AppState;

/// Calculator form fields, kept as submitted so the form re-renders verbatim
#[derive(Debug, Clone, Deserialize)]
pub struct CalcForm {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub product_cost: String,
    #[serde(default)]
    pub warranty_years: String,
    #[serde(default)]
    pub annual_failure_rate: String,
    #[serde(default)]
    pub service_cost_per_claim: String,
    #[serde(default)]
    pub target_margin_pct: String,
    #[serde(default)]
    pub action: Option<String>,
}

impl Default for CalcForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            currency: "AUD".to_string(),
            product_cost: "500".to_string(),
            warranty_years: "2".to_string(),
            annual_failure_rate: "0.05".to_string(),
            service_cost_per_claim: "120".to_string(),
            target_margin_pct: "0.3".to_string(),
            action: None,
        }
    }
}

impl CalcForm {
    fn wants_save(&self) -> bool {
        self.action.as_deref() == Some("save")
    }

    /// Parse the text fields into an API request.
    fn to_request(&self) -> std::result::Result<CalculatePricingRequest, ValidationError> {
        let mut errors = Vec::new();
        let request = CalculatePricingRequest {
            product_cost: number_field("productCost", &self.product_cost, &mut errors),
            warranty_years: number_field("warrantyYears", &self.warranty_years, &mut errors),
            annual_failure_rate: number_field(
                "annualFailureRate",
                &self.annual_failure_rate,
                &mut errors,
            ),
            service_cost_per_claim: number_field(
                "serviceCostPerClaim",
                &self.service_cost_per_claim,
                &mut errors,
            ),
            target_margin_pct: number_field("targetMarginPct", &self.target_margin_pct, &mut errors),
        };

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(ValidationError::from_messages(errors))
        }
    }
}

/// Blank fields map to `None` so validation reports them as required.
fn number_field(field: &str, raw: &str, errors: &mut Vec<String>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(format!("{} must be a number", field));
            None
        }
    }
}

/// Result figures formatted for display
pub struct ResultView {
    pub expected_claim_cost: String,
    pub suggested_price: String,
    pub break_even_units: String,
}

impl ResultView {
    fn new(result: &PricingResult, currency: &str) -> Self {
        Self {
            expected_claim_cost: format!("{} {:.2}", currency, result.expected_claim_cost),
            suggested_price: format!("{} {:.2}", currency, result.suggested_price),
            break_even_units: result.break_even_units.to_string(),
        }
    }
}

/// Landing page template
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    site_name: String,
}

/// Calculator page template
#[derive(Template)]
#[template(path = "calc.html")]
struct CalcTemplate {
    site_name: String,
    form: CalcForm,
    result: Option<ResultView>,
    error: Option<String>,
    saved_id: Option<String>,
}

/// Landing page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let template = HomeTemplate {
        site_name: state.config.site_name.clone(),
    };
    Ok(Html(template.render()?))
}

/// Empty calculator with default inputs
pub async fn calc_form(State(state): State<AppState>) -> Result<Html<String>> {
    let template = CalcTemplate {
        site_name: state.config.site_name.clone(),
        form: CalcForm::default(),
        result: None,
        error: None,
        saved_id: None,
    };
    Ok(Html(template.render()?))
}

/// Calculate (and optionally save) from a submitted form
pub async fn calc_submit(
    State(state): State<AppState>,
    submitted: std::result::Result<Form<CalcForm>, FormRejection>,
) -> Result<Html<String>> {
    let Form(form) = submitted?;
    let mut template = CalcTemplate {
        site_name: state.config.site_name.clone(),
        form,
        result: None,
        error: None,
        saved_id: None,
    };

    let calculated = template
        .form
        .to_request()
        .and_then(|request| request.validate().map(|input| (request, input)));

    match calculated {
        Ok((request, input)) => {
            let result = compute_pricing(&input);
            template.result = Some(ResultView::new(&result, &template.form.currency));

            if template.form.wants_save() {
                let record = SavedModelRequest {
                    product_name: template.form.product_name.clone(),
                    currency: template.form.currency.clone(),
                    product_cost: request.product_cost.unwrap_or_default(),
                    warranty_years: request.warranty_years.unwrap_or_default(),
                    annual_failure_rate: request.annual_failure_rate.unwrap_or_default(),
                    service_cost_per_claim: request.service_cost_per_claim.unwrap_or_default(),
                    target_margin_pct: request.target_margin_pct.unwrap_or_default(),
                };
                let record = serde_json::to_value(&record)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                template.saved_id = Some(acknowledge(record).id.to_string());
            }
        }
        Err(e) => {
            debug!("Calculator form rejected: {}", e);
            template.error = Some(e.to_string());
        }
    }

    Ok(Html(template.render()?))
}
