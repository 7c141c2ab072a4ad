//! Database module - PostgreSQL connection and migrations

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Create database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create tables if not exist
    sqlx::query(SCHEMA_SQL)
        .execute(pool)
        .await?;

    tracing::info!("Database schema applied successfully");
    Ok(())
}

/// Database schema SQL
const SCHEMA_SQL: &str = r#"
-- Species-level predictions (written by the upstream pipeline, read-only here)
CREATE TABLE IF NOT EXISTS predictions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    taxon VARCHAR(255) NOT NULL,
    order_name VARCHAR(255),
    family VARCHAR(255),
    genus VARCHAR(255),
    likely_poaching_country VARCHAR(255),
    poaching_risk_score DOUBLE PRECISION
);

-- Per (species, exporting country) trade feature profiles
CREATE TABLE IF NOT EXISTS features (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    taxon VARCHAR(255) NOT NULL,
    exporter VARCHAR(255) NOT NULL,
    export_qty_log DOUBLE PRECISION,
    num_trade_events DOUBLE PRECISION,
    source_risk DOUBLE PRECISION,
    live_trade_ratio DOUBLE PRECISION,
    appendix_risk DOUBLE PRECISION
);

-- Indexes for the case-folded exact-match lookups
CREATE INDEX IF NOT EXISTS idx_predictions_taxon ON predictions(LOWER(taxon));
CREATE INDEX IF NOT EXISTS idx_features_taxon ON features(LOWER(taxon));
CREATE INDEX IF NOT EXISTS idx_features_exporter ON features(exporter);
"#;
