//! Warranty pricing module.
//!
//! Turns product cost, warranty term, failure rate, per-claim service cost and
//! target margin into a suggested warranty price. The math lives in
//! `calculators` and never touches I/O; `routes` exposes it over HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_pricing, compute_pricing_with_fixed_costs, round_money};
pub use models::{BreakEven, PricingInput, PricingResult};
pub use routes::router;
