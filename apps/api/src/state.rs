use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::recommendation::orchestrator::RecommendationEngine;
use crate::store::{ProfileStore, SkillResourceStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommendationEngine>,
    pub profiles: Arc<dyn ProfileStore>,
    pub resources: Arc<dyn SkillResourceStore>,
    /// Generator pre-configured with the career-assistant system instruction.
    pub assistant: Arc<dyn TextGenerator>,
}
