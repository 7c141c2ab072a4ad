//! Species facts handler

use axum::extract::{Query, State};
use axum::Json;

use crate::facts::ReferenceFact;
use crate::handlers::animal::TaxonQuery;
use crate::{AppError, AppResult, AppState};

/// GET /get_species_facts?taxon=<species>
///
/// Returns the structured reference-fact record, not prose.
pub async fn get_species_facts(
    State(state): State<AppState>,
    Query(query): Query<TaxonQuery>,
) -> AppResult<Json<ReferenceFact>> {
    let taxon = query.require_taxon()?;

    let fact = state
        .facts
        .get(taxon)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Species facts not found".to_string()))?;

    Ok(Json(fact))
}
