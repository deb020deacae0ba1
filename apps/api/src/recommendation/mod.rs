// Internship recommendation engine.
// Implements: AI ranking over a sampled catalog, deterministic skill-overlap fallback,
// and the orchestrator that picks between them.
// All LLM calls go through llm_client; nothing here talks to Gemini directly.

use serde::Serialize;

use crate::models::role::Role;

pub mod fallback;
pub mod handlers;
pub mod orchestrator;
pub mod primary;
pub mod prompts;
pub mod sampling;

/// Upper bound on the length of any recommendation list.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// A role with its skill-overlap score. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRole {
    #[serde(flatten)]
    pub role: Role,
    /// Fraction of the role's required skills the profile covers, 0.0 – 1.0.
    pub score: f64,
    pub missing_skills: Vec<String>,
}

/// One entry of a recommendation response. Serialized without a tag so the
/// client sees a plain role object, with `score` and `missing_skills` when scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendedRole {
    Ranked(Role),
    Scored(ScoredRole),
}

impl RecommendedRole {
    pub fn role(&self) -> &Role {
        match self {
            RecommendedRole::Ranked(role) => role,
            RecommendedRole::Scored(scored) => &scored.role,
        }
    }
}
