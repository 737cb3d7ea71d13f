mod accounts;
mod auth;
mod config;
mod db;
mod errors;
mod insurance;
mod models;
mod recommendations;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema, seed_postings};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::{PgInsuranceStore, PgPostingStore, PgPreferenceStore, PgUserStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_name}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting internship portal API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the schema and seed catalog exist
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;
    seed_postings(&db).await?;

    // Build app state around the Postgres-backed storage ports
    let state = AppState {
        users: Arc::new(PgUserStore::new(db.clone())),
        insurance: Arc::new(PgInsuranceStore::new(db.clone())),
        preferences: Arc::new(PgPreferenceStore::new(db.clone())),
        postings: Arc::new(PgPostingStore::new(db)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser frontend is served separately

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
