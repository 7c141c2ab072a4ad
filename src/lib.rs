//! Wildlife Trade Risk API
//!
//! Read-only query server over precomputed poaching-risk predictions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  WILDTRADE RISK API                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌───────────────────┐  │
//! │  │  Routes   │  │  Explanation │  │  Global Means     │  │
//! │  │  (Axum)   │  │  Engine      │  │  (startup, Arc)   │  │
//! │  └─────┬─────┘  └──────┬───────┘  └─────────┬─────────┘  │
//! │        └───────────────┼────────────────────┘            │
//! │                        ▼                                 │
//! │                 ┌─────────────┐                          │
//! │                 │ PostgreSQL  │                          │
//! │                 └─────────────┘                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod explain;
pub mod facts;
pub mod handlers;
pub mod models;
pub mod stats;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use facts::FactTable;
use stats::GlobalMeans;

/// Shared application state
///
/// Means and facts are computed once before serving and never mutated, so
/// handlers read them concurrently without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: config::Config,
    pub means: Arc<GlobalMeans>,
    pub facts: Arc<FactTable>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/get_animal_data", get(handlers::animal::get_animal_data))
        .route("/get_species_facts", get(handlers::facts::get_species_facts))
        .route(
            "/get_comparison_data",
            get(handlers::comparison::get_comparison_data),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
