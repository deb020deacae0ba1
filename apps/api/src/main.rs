mod assessment;
mod auth;
mod chatbot;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chatbot::prompts::CAREER_ASSISTANT_SYSTEM;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::recommendation::orchestrator::{RecommendationEngine, RecommendationSettings};
use crate::recommendation::primary::PrimaryRanker;
use crate::recommendation::sampling::{RoleSampler, SeededSampler, StoreSampler};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::{PgProfileStore, PgRoleCatalog, PgSkillResourceStore};

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

    info!("Starting Arise API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let profiles = Arc::new(PgProfileStore::new(db.clone()));
    let catalog = Arc::new(PgRoleCatalog::new(db.clone()));
    let resources = Arc::new(PgSkillResourceStore::new(db));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    // The ranker gets one attempt; its timeout decides when to fall back
    let ranker_llm = llm
        .clone()
        .with_max_attempts(1)
        .with_system_instruction(JSON_ONLY_SYSTEM);
    let assistant = llm.with_system_instruction(CAREER_ASSISTANT_SYSTEM);

    let rec_config = &config.recommender;
    let sampler: Arc<dyn RoleSampler> = match rec_config.sample_seed {
        Some(seed) => {
            info!("Catalog sampling is seeded (seed={seed})");
            Arc::new(SeededSampler::new(seed))
        }
        None => Arc::new(StoreSampler),
    };

    let recommender = RecommendationEngine::new(
        profiles.clone(),
        catalog,
        sampler,
        PrimaryRanker::new(
            Arc::new(ranker_llm),
            Duration::from_secs(rec_config.ai_timeout_secs),
        ),
        RecommendationSettings {
            sample_size: rec_config.sample_size,
            fallback_catalog_limit: rec_config.fallback_catalog_limit,
        },
    );
    info!(
        "Recommender ready: sample_size={}, ai_timeout={}s, fallback_limit={:?}",
        rec_config.sample_size, rec_config.ai_timeout_secs, rec_config.fallback_catalog_limit
    );

    // Build app state
    let state = AppState {
        recommender: Arc::new(recommender),
        profiles,
        resources,
        assistant: Arc::new(assistant),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the SPA host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
