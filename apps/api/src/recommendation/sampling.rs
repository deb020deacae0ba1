//! Catalog sampling for the AI ranker's context window.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::role::Role;
use crate::store::{RoleCatalog, StoreError};

/// Chooses which slice of the catalog the AI ranker gets to see.
#[async_trait]
pub trait RoleSampler: Send + Sync {
    async fn sample(&self, catalog: &dyn RoleCatalog, size: usize)
        -> Result<Vec<Role>, StoreError>;
}

/// Database-side uniform random sample. Default in production.
pub struct StoreSampler;

#[async_trait]
impl RoleSampler for StoreSampler {
    async fn sample(
        &self,
        catalog: &dyn RoleCatalog,
        size: usize,
    ) -> Result<Vec<Role>, StoreError> {
        catalog.sample_roles(size).await
    }
}

/// Deterministic sample: the same seed over the same catalog always picks the same roles.
pub struct SeededSampler {
    seed: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl RoleSampler for SeededSampler {
    async fn sample(
        &self,
        catalog: &dyn RoleCatalog,
        size: usize,
    ) -> Result<Vec<Role>, StoreError> {
        let roles = catalog.list_all_roles(usize::MAX).await?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(roles.choose_multiple(&mut rng, size).cloned().collect())
    }
}
