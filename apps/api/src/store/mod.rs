//! Storage seams for profiles, the role catalog and skill resources.
//!
//! Handlers and the recommender only see these traits. `AppState` carries
//! `Arc<dyn _>` instances, PostgreSQL-backed in production.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::models::role::Role;
use crate::models::skill_resource::SkillResource;

pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError>;

    /// Creates or wholesale-overwrites the user's profile, returning what was stored.
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, StoreError>;
}

#[async_trait]
pub trait RoleCatalog: Send + Sync {
    /// Uniform random sample of at most `n` roles.
    async fn sample_roles(&self, n: usize) -> Result<Vec<Role>, StoreError>;

    /// Up to `limit` roles in catalog (insertion) order.
    async fn list_all_roles(&self, limit: usize) -> Result<Vec<Role>, StoreError>;

    /// Up to `limit` roles, newest `date_posted` first; equal dates keep catalog order.
    async fn list_recent_roles(&self, limit: usize) -> Result<Vec<Role>, StoreError>;

    /// Roles whose `role_id` is in `ids`. Output order is unspecified.
    async fn find_roles_by_ids(&self, ids: &[String]) -> Result<Vec<Role>, StoreError>;
}

#[async_trait]
pub trait SkillResourceStore: Send + Sync {
    /// Case-insensitive exact match on the skill name.
    async fn find_by_skill_name(&self, skill_name: &str)
        -> Result<Option<SkillResource>, StoreError>;
}
