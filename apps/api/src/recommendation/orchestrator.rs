//! Recommendation orchestrator. Decides which strategy answers a request.
//!
//! Flow: get_profile → no skills? recent roles
//!       → sample catalog → primary ranker → on any soft failure, fallback ranker
//!       over the whole catalog (once, no retries).
//!
//! Callers cannot tell which strategy produced the list. Only storage errors escape.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::recommendation::fallback::FallbackRanker;
use crate::recommendation::primary::{PrimaryOutcome, PrimaryRanker};
use crate::recommendation::sampling::RoleSampler;
use crate::recommendation::{RecommendedRole, MAX_RECOMMENDATIONS};
use crate::store::{ProfileStore, RoleCatalog, StoreError};

#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    /// Catalog roles shown to the AI ranker.
    pub sample_size: usize,
    /// Optional cap on the catalog roles (in catalog order) scored by the fallback
    /// ranker. `None` scores the whole catalog.
    pub fallback_catalog_limit: Option<usize>,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            sample_size: 50,
            fallback_catalog_limit: None,
        }
    }
}

pub struct RecommendationEngine {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn RoleCatalog>,
    sampler: Arc<dyn RoleSampler>,
    primary: PrimaryRanker,
    fallback: FallbackRanker,
    settings: RecommendationSettings,
}

impl RecommendationEngine {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        catalog: Arc<dyn RoleCatalog>,
        sampler: Arc<dyn RoleSampler>,
        primary: PrimaryRanker,
        settings: RecommendationSettings,
    ) -> Self {
        Self {
            profiles,
            catalog,
            sampler,
            primary,
            fallback: FallbackRanker::default(),
            settings,
        }
    }

    /// Returns at most 10 roles for `user_id`, most relevant first.
    pub async fn recommend(&self, user_id: Uuid) -> Result<Vec<RecommendedRole>, StoreError> {
        // Sampling sorts the whole table, so it waits until a skilled profile is known.
        let profile = match self.profiles.get_profile(user_id).await? {
            Some(profile) if profile.has_skills() => profile,
            _ => {
                info!("No assessed skills for user {user_id}; returning most recent roles");
                let recent = self.catalog.list_recent_roles(MAX_RECOMMENDATIONS).await?;
                return Ok(recent.into_iter().map(RecommendedRole::Ranked).collect());
            }
        };

        let sample = self
            .sampler
            .sample(self.catalog.as_ref(), self.settings.sample_size)
            .await?;

        match self
            .primary
            .rank(&profile, &sample, self.catalog.as_ref())
            .await?
        {
            PrimaryOutcome::Ranked(roles) => {
                info!(
                    "AI ranker returned {} roles for user {user_id} (sample of {})",
                    roles.len(),
                    sample.len()
                );
                Ok(roles.into_iter().map(RecommendedRole::Ranked).collect())
            }
            PrimaryOutcome::Failed(reason) => {
                warn!("AI ranking unavailable for user {user_id}: {reason}; using skill-overlap fallback");
                let catalog = self
                    .catalog
                    .list_all_roles(self.settings.fallback_catalog_limit.unwrap_or(usize::MAX))
                    .await?;
                let scored = self.fallback.rank(&profile, &catalog);
                info!(
                    "Fallback ranker scored {} roles for user {user_id}",
                    catalog.len()
                );
                Ok(scored.into_iter().map(RecommendedRole::Scored).collect())
            }
        }
    }
}
