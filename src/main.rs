//! Wildtrade Risk API server binary

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wildtrade_api::models::TradeFeatureRecord;
use wildtrade_api::stats::GlobalMeans;
use wildtrade_api::{config, create_router, db, facts::FactTable, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wildtrade_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Wildtrade Risk API starting ({})...", config.environment);
    tracing::info!(
        "Database: {}",
        config.database_url.split('@').last().unwrap_or("***")
    );

    // Initialize database pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    // One-time startup aggregation. A fetch failure degrades to empty
    // statistics rather than aborting; explanations weaken, the server
    // still runs.
    let means = match TradeFeatureRecord::list_all(&pool).await {
        Ok(records) if !records.is_empty() => {
            let means = GlobalMeans::compute(&records);
            tracing::info!("Global means calculated over {} feature rows", records.len());
            means
        }
        Ok(_) => {
            tracing::warn!("No feature data found; explanations will use fallback prose");
            GlobalMeans::empty()
        }
        Err(e) => {
            tracing::warn!("Mean calculation failed: {e}; continuing with empty statistics");
            GlobalMeans::empty()
        }
    };

    // Build application state
    let state = AppState {
        pool,
        config: config.clone(),
        means: Arc::new(means),
        facts: Arc::new(FactTable::builtin()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
