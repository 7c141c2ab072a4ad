//! Animal data handler
//!
//! The main lookup: prediction, heatmap feature rows, and the assembled
//! risk explanation for one species.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::{SpeciesPrediction, TradeFeatureRecord};
use crate::{explain, AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct TaxonQuery {
    pub taxon: Option<String>,
}

impl TaxonQuery {
    /// Trimmed taxon, rejecting a missing or blank parameter.
    pub fn require_taxon(&self) -> Result<&str, AppError> {
        self.taxon
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::BadRequest("No taxon provided".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct AnimalDataResponse {
    pub basic_info: SpeciesPrediction,
    pub heatmap_data: Vec<TradeFeatureRecord>,
    pub risk_explanation: String,
}

/// GET /get_animal_data?taxon=<species>
///
/// Returns the prediction record, every feature row for the species
/// (verbatim, for the heatmap), and a prose explanation: the curated
/// motivation sentence (or a generic fallback) followed by the engine's
/// comparison of the predicted country's profile against global means.
pub async fn get_animal_data(
    State(state): State<AppState>,
    Query(query): Query<TaxonQuery>,
) -> AppResult<Json<AnimalDataResponse>> {
    let taxon = query.require_taxon()?;

    let prediction = SpeciesPrediction::find_by_taxon(&state.pool, taxon)
        .await?
        .ok_or_else(|| AppError::NotFound("Species not found".to_string()))?;

    let why = why_text(state.facts.get(taxon));

    let features = TradeFeatureRecord::list_by_taxon(&state.pool, taxon).await?;

    // First row whose exporter matches the predicted country; none is a
    // valid outcome and degrades the explanation to the why-text alone.
    let profile = features
        .iter()
        .find(|f| prediction.likely_poaching_country.as_deref() == Some(f.exporter.as_str()));

    let how_text = explain::explain(profile, &state.means);

    Ok(Json(AnimalDataResponse {
        risk_explanation: format!("{}{}", why, how_text),
        basic_info: prediction,
        heatmap_data: features,
    }))
}

/// Motivation sentence preceding the engine output: the curated reason, or
/// a generic demand-driven fallback when no reference fact exists.
fn why_text(fact: Option<&crate::facts::ReferenceFact>) -> String {
    match fact {
        Some(fact) => format!("This species {} ", fact.poaching_reason),
        None => "Demand-driven international trade pressure detected. ".to_string(),
    }
}
