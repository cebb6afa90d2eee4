//! Saved pricing model route handlers.
//!
//! There is no storage behind these yet: a saved model is acknowledged and
//! echoed back unchanged.

use axum::{body::Bytes, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::AppState;

/// A pricing model as submitted from the calculator page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedModelRequest {
    pub product_name: String,
    pub currency: String,
    pub product_cost: f64,
    pub warranty_years: f64,
    pub annual_failure_rate: f64,
    pub service_cost_per_claim: f64,
    pub target_margin_pct: f64,
}

/// Acknowledgement returned for a saved model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedModelAck {
    pub ok: bool,
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub received: Value,
}

/// Saved model routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/models", get(status).post(save))
}

/// Record a model and acknowledge it.
pub fn acknowledge(record: Value) -> SavedModelAck {
    let ack = SavedModelAck {
        ok: true,
        id: Uuid::new_v4(),
        received_at: Utc::now(),
        received: record,
    };
    info!("Saved pricing model {}", ack.id);
    ack
}

async fn status() -> Json<Value> {
    Json(json!({ "ok": true, "at": "/api/models" }))
}

/// Accept any JSON body; an unreadable body is stored as `{}`.
async fn save(body: Bytes) -> (StatusCode, Json<SavedModelAck>) {
    let record = serde_json::from_slice::<Value>(&body).unwrap_or_else(|_| json!({}));
    (StatusCode::CREATED, Json(acknowledge(record)))
}
