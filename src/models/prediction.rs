//! Species prediction model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One precomputed prediction per species, sourced from the upstream
/// pipeline. Serialized field names match the upstream record keys.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpeciesPrediction {
    #[serde(skip_serializing, default)]
    pub id: Uuid,
    #[serde(rename = "Taxon")]
    pub taxon: String,
    #[serde(rename = "Order")]
    pub order_name: Option<String>,
    #[serde(rename = "Family")]
    pub family: Option<String>,
    #[serde(rename = "Genus")]
    pub genus: Option<String>,
    pub likely_poaching_country: Option<String>,
    pub poaching_risk_score: Option<f64>,
}

impl SpeciesPrediction {
    /// Case-insensitive exact-match lookup by taxon.
    ///
    /// Case-folded equality against the whole column, not a substring
    /// match. Duplicate rows for one taxon are an upstream data-quality
    /// issue; the first row returned wins, ordering unspecified.
    pub async fn find_by_taxon(pool: &PgPool, taxon: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, SpeciesPrediction>(
            "SELECT * FROM predictions WHERE LOWER(taxon) = LOWER($1)",
        )
        .bind(taxon.trim())
        .fetch_optional(pool)
        .await
    }
}
