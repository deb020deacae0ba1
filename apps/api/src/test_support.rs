//! In-memory doubles for the storage and AI seams. Test-only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::profile::{
    DurationPreference, LocationPreference, Profile, StipendExpectation,
};
use crate::models::role::Role;
use crate::models::skill_resource::SkillResource;
use crate::store::{ProfileStore, RoleCatalog, SkillResourceStore, StoreError};

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

pub fn role(id: &str, skills: &[&str]) -> Role {
    role_posted(id, skills, 0)
}

/// A role posted `days_after` days after a fixed base date.
pub fn role_posted(id: &str, skills: &[&str], days_after: i64) -> Role {
    Role {
        role_id: id.to_string(),
        title: format!("{id} intern"),
        company: "Acme".to_string(),
        location: Some("Hybrid".to_string()),
        stipend: None,
        duration: Some("3 Months".to_string()),
        description: None,
        skills_required: skills.iter().map(|s| s.to_string()).collect(),
        apply_link: None,
        date_posted: base_date() + chrono::Duration::days(days_after),
    }
}

pub fn profile(skills: &[&str]) -> Profile {
    Profile {
        user_id: Uuid::new_v4(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: vec!["Web Development".to_string()],
        qualification: "B.Tech".to_string(),
        field_of_study: Some("Computer Science".to_string()),
        preferred_sectors: vec!["IT".to_string()],
        location_preference: LocationPreference::Hybrid,
        state_preference: vec![],
        city_preference: vec![],
        duration_preference: DurationPreference::ThreeMonths,
        stipend_expectation: StipendExpectation::Any,
        updated_at: base_date(),
    }
}

/// Catalog order is the order of `roles`. `sample_roles` returns a prefix so
/// sampling stays deterministic; `find_roles_by_ids` answers in catalog order.
#[derive(Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<Uuid, Profile>>,
    roles: Vec<Role>,
    resources: Vec<SkillResource>,
    failing: AtomicBool,
    sample_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles,
            ..Default::default()
        }
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile);
        self
    }

    pub fn with_resources(mut self, resources: Vec<SkillResource>) -> Self {
        self.resources = resources;
        self
    }

    /// Every subsequent call fails as if the connection pool were exhausted.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sample_calls(&self) -> usize {
        self.sample_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        self.check()?;
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, StoreError> {
        self.check()?;
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile.clone());
        Ok(profile.clone())
    }
}

#[async_trait]
impl RoleCatalog for MemoryStore {
    async fn sample_roles(&self, n: usize) -> Result<Vec<Role>, StoreError> {
        self.check()?;
        self.sample_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.roles.iter().take(n).cloned().collect())
    }

    async fn list_all_roles(&self, limit: usize) -> Result<Vec<Role>, StoreError> {
        self.check()?;
        Ok(self.roles.iter().take(limit).cloned().collect())
    }

    async fn list_recent_roles(&self, limit: usize) -> Result<Vec<Role>, StoreError> {
        self.check()?;
        let mut roles = self.roles.clone();
        roles.sort_by(|a, b| b.date_posted.cmp(&a.date_posted));
        roles.truncate(limit);
        Ok(roles)
    }

    async fn find_roles_by_ids(&self, ids: &[String]) -> Result<Vec<Role>, StoreError> {
        self.check()?;
        Ok(self
            .roles
            .iter()
            .filter(|r| ids.contains(&r.role_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SkillResourceStore for MemoryStore {
    async fn find_by_skill_name(
        &self,
        skill_name: &str,
    ) -> Result<Option<SkillResource>, StoreError> {
        self.check()?;
        Ok(self
            .resources
            .iter()
            .find(|r| r.skill_name.to_lowercase() == skill_name.trim().to_lowercase())
            .cloned())
    }
}

enum StubReply {
    Text(String),
    Fail,
}

/// Canned `TextGenerator`. Records every prompt it receives.
pub struct StubGenerator {
    reply: StubReply,
    delay: Option<Duration>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: StubReply::Text(text.to_string()),
            delay: None,
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: StubReply::Fail,
            delay: None,
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn slow(text: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::replying(text)
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Fail => Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }
}
