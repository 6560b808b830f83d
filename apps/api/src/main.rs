mod config;
mod db;
mod errors;
mod models;
mod profiles;
mod recommendation;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::recommendation::recommender::{
    CareerRecommender, HeuristicRecommender, RemoteRecommender,
};
use crate::recommendation::remote::RemoteRecommenderClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    let recommender = build_recommender(&config)?;
    info!("Recommender initialized (backend: {})", recommender.backend());

    let state = AppState {
        db,
        config: config.clone(),
        recommender,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Remote recommender when `RECOMMENDER_URL` is set, heuristic-only otherwise.
fn build_recommender(config: &Config) -> Result<Arc<dyn CareerRecommender>> {
    match &config.recommender_url {
        Some(url) => {
            let client = RemoteRecommenderClient::new(url.clone(), config.recommender_timeout)?;
            info!(
                "Remote recommendations from {url} (timeout {}s, heuristic fallback)",
                config.recommender_timeout.as_secs()
            );
            Ok(Arc::new(RemoteRecommender::new(client)))
        }
        None => {
            info!("RECOMMENDER_URL not set; serving heuristic recommendations only");
            Ok(Arc::new(HeuristicRecommender))
        }
    }
}
