//! Pricing page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::catalog::{SubjectPricing, assemble_pricing, pricing_context};
use crate::db::SubjectRepository;
use crate::error::Result;
use crate::state::AppState;

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct PricingTemplate {
    /// Priced subjects in display order.
    pub subjects: Vec<SubjectPricing>,
}

/// Display the pricing page.
///
/// # Errors
///
/// Fails with a server error if a configured subject is missing or the
/// database is unreachable.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<PricingTemplate> {
    let repo = SubjectRepository::new(state.pool());
    let subjects = assemble_pricing(&repo, state.subjects()).await?;
    tracing::debug!(count = subjects.len(), "Pricing page assembled");

    Ok(PricingTemplate { subjects })
}

/// Return the pricing values as a flat `{subject}_{field}` JSON object.
///
/// # Errors
///
/// Same as [`index`].
#[instrument(skip(state))]
pub async fn api(State(state): State<AppState>) -> Result<Json<Map<String, Value>>> {
    let repo = SubjectRepository::new(state.pool());
    let subjects = assemble_pricing(&repo, state.subjects()).await?;

    Ok(Json(pricing_context(&subjects)))
}
