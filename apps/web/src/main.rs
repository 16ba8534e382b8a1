mod analysis;
mod config;
mod errors;
mod models;
mod pages;
mod results;
mod routes;
mod session;
mod state;
mod store;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::generator::MockAnalysisGenerator;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryResultStore, RedisResultStore, ResultStore};
use crate::upload::flow::InFlightSubmissions;

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

    info!("Starting RE-SCAN web v{}", env!("CARGO_PKG_VERSION"));

    // Result store: Redis when configured, otherwise process memory
    let store: Arc<dyn ResultStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisResultStore::connect(url, config.session_ttl).await?),
        None => {
            info!("REDIS_URL not set, keeping results in memory");
            Arc::new(InMemoryResultStore::new(config.session_ttl))
        }
    };

    info!("Result store backend: {}", store.backend());

    let generator = Arc::new(MockAnalysisGenerator::new(
        config.analysis_delay,
        config.suggestion_range,
    ));
    info!(
        "Mock analysis generator ready (delay: {:?}, suggestions: {}..={})",
        config.analysis_delay, config.suggestion_range.min, config.suggestion_range.max
    );

    let state = AppState {
        config: config.clone(),
        generator,
        store,
        in_flight: InFlightSubmissions::default(),
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
