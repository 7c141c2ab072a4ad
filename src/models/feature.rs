//! Trade feature record model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One trade profile per (species, exporting country) pair. Signal columns
/// are nullable upstream, so each is optional here; missing values are
/// excluded from the global means but read as zero in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TradeFeatureRecord {
    #[serde(skip_serializing, default)]
    pub id: Uuid,
    #[serde(rename = "Taxon")]
    pub taxon: String,
    #[serde(rename = "Exporter")]
    pub exporter: String,
    pub export_qty_log: Option<f64>,
    pub num_trade_events: Option<f64>,
    pub source_risk: Option<f64>,
    pub live_trade_ratio: Option<f64>,
    pub appendix_risk: Option<f64>,
}

impl TradeFeatureRecord {
    /// Read a signal by name. `None` for a missing value or unknown name.
    pub fn signal(&self, name: &str) -> Option<f64> {
        match name {
            "export_qty_log" => self.export_qty_log,
            "num_trade_events" => self.num_trade_events,
            "source_risk" => self.source_risk,
            "live_trade_ratio" => self.live_trade_ratio,
            "appendix_risk" => self.appendix_risk,
            _ => None,
        }
    }

    /// All feature rows for a species, case-insensitive exact taxon match.
    pub async fn list_by_taxon(pool: &PgPool, taxon: &str) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, TradeFeatureRecord>(
            "SELECT * FROM features WHERE LOWER(taxon) = LOWER($1)",
        )
        .bind(taxon.trim())
        .fetch_all(pool)
        .await
    }

    /// The full feature set, fetched once at startup for the global means.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, TradeFeatureRecord>("SELECT * FROM features")
            .fetch_all(pool)
            .await
    }
}
