//! Route handlers outside the pricing API

pub mod health;
pub mod models;
pub mod pages;

use axum::{routing::get, Router};

use crate::AppState;

/// Pages, saved models and health check
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/calc", get(pages::calc_form).post(pages::calc_submit))
        .route("/health", get(health::health))
        .merge(models::router())
}
