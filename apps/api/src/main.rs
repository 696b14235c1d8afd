mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::validation::validate_catalog;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Load reference data once; shared read-only by every request
    let catalog = Catalog::load(&config.courses_path, &config.curricula_path)
        .context("Failed to load course/curriculum catalog")?;
    info!(
        "Catalog loaded: {} courses, {} curricula",
        catalog.courses().len(),
        catalog.curricula().len()
    );

    let issues = validate_catalog(&catalog);
    for issue in &issues {
        warn!("Catalog issue ({:?}): {}", issue.kind, issue.description);
    }
    if !issues.is_empty() {
        warn!("Catalog has {} consistency issue(s); serving as loaded", issues.len());
    }

    // Initialize LLM client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        config.anthropic_api_url.clone(),
        config.advisory_timeout,
    )
    .context("Failed to build LLM HTTP client")?;
    if llm.is_configured() {
        info!(
            "LLM client initialized (model: {}, timeout: {:?})",
            llm_client::MODEL,
            config.advisory_timeout
        );
    } else {
        warn!("ANTHROPIC_API_KEY not set; advisory text will always use the fallback");
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        generator: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the planner frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
