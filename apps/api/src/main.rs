mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::catalog::CareerCatalog;
use crate::matching::engine::ContentBasedRecommender;
use crate::matching::store::ResultStore;
use crate::matching::synonyms::SynonymMap;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    let synonyms = load_synonyms(&config)?;
    info!(
        "Matching engine ready: {} careers, {} synonym classes",
        catalog.len(),
        synonyms.len()
    );

    if catalog.is_empty() {
        warn!("Career catalog is empty; every profile will get the no-match result");
    }

    let recommender = Arc::new(ContentBasedRecommender::new(
        Arc::new(catalog),
        Arc::new(synonyms),
    ));

    let state = AppState {
        recommender,
        results: ResultStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in catalog unless `CATALOG_PATH` points at a JSON file.
fn load_catalog(config: &Config) -> Result<CareerCatalog> {
    match &config.catalog_path {
        Some(path) => {
            info!("Loading career catalog from {}", path.display());
            CareerCatalog::from_json_file(path).context("Failed to load career catalog")
        }
        None => Ok(CareerCatalog::builtin()),
    }
}

/// Built-in synonyms unless `SYNONYMS_PATH` points at a JSON file.
fn load_synonyms(config: &Config) -> Result<SynonymMap> {
    match &config.synonyms_path {
        Some(path) => {
            info!("Loading synonym map from {}", path.display());
            SynonymMap::from_json_file(path).context("Failed to load synonym map")
        }
        None => Ok(SynonymMap::builtin()),
    }
}
