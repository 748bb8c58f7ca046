//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Pricing page
//! GET  /redirect        - Static redirect page
//! GET  /api/pricing     - Pricing values as a flat JSON object
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (database)
//! ```

pub mod health;
pub mod pricing;
pub mod redirect;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pricing::index))
        .route("/redirect", get(redirect::show))
        .route("/api/pricing", get(pricing::api))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
