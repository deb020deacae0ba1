//! Primary ranker. Asks the generative model to pick the best roles from a catalog sample.
//!
//! This ranker is soft-fail: every AI-side problem (timeout, API error, unparseable or
//! mis-shaped output, IDs that match nothing) becomes a typed `RankFailure` so the
//! orchestrator can fall back with a plain `match`. Only storage errors propagate.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::profile::Profile;
use crate::models::role::Role;
use crate::recommendation::prompts::RANKING_PROMPT_TEMPLATE;
use crate::store::{RoleCatalog, StoreError};

/// How many role IDs the model is asked for.
pub const TOP_K: usize = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankFailure {
    #[error("catalog sample is empty")]
    EmptySample,

    #[error("AI call timed out after {0:?}")]
    Timeout(Duration),

    #[error("AI call failed: {0}")]
    Generation(String),

    #[error("AI response is not valid JSON: {0}")]
    Malformed(String),

    #[error("AI response is not a JSON array")]
    NotAnArray,

    #[error("AI response array contains a non-string element")]
    NonStringElement,

    #[error("no returned role id matches the catalog")]
    CatalogMismatch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryOutcome {
    /// Resolved roles in the model's order. Never empty.
    Ranked(Vec<Role>),
    Failed(RankFailure),
}

pub struct PrimaryRanker {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
    top_k: usize,
}

impl PrimaryRanker {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self {
            generator,
            timeout,
            top_k: TOP_K,
        }
    }

    /// Ranks `sample` for `profile` and resolves the chosen IDs against the full catalog.
    pub async fn rank(
        &self,
        profile: &Profile,
        sample: &[Role],
        catalog: &dyn RoleCatalog,
    ) -> Result<PrimaryOutcome, StoreError> {
        let ids = match self.request_role_ids(profile, sample).await {
            Ok(ids) => ids,
            Err(failure) => return Ok(PrimaryOutcome::Failed(failure)),
        };

        let found = catalog.find_roles_by_ids(&ids).await?;
        let ordered = order_by_ids(&ids, found);

        if ordered.is_empty() {
            Ok(PrimaryOutcome::Failed(RankFailure::CatalogMismatch))
        } else {
            Ok(PrimaryOutcome::Ranked(ordered))
        }
    }

    /// Runs the bounded AI call and validates the shape of its answer.
    /// Returns at most `top_k` distinct IDs in the model's order.
    pub async fn request_role_ids(
        &self,
        profile: &Profile,
        sample: &[Role],
    ) -> Result<Vec<String>, RankFailure> {
        if sample.is_empty() {
            return Err(RankFailure::EmptySample);
        }

        let prompt = build_ranking_prompt(profile, sample, self.top_k);

        let text = match tokio::time::timeout(self.timeout, self.generator.generate_text(&prompt))
            .await
        {
            Err(_) => return Err(RankFailure::Timeout(self.timeout)),
            Ok(Err(e)) => return Err(RankFailure::Generation(e.to_string())),
            Ok(Ok(text)) => text,
        };

        let ids = parse_role_ids(&text)?;

        let mut seen = HashSet::new();
        Ok(ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .take(self.top_k)
            .collect())
    }
}

/// Parses the model's reply into role IDs: strips code fences, then requires a
/// JSON array whose every element is a string.
pub fn parse_role_ids(text: &str) -> Result<Vec<String>, RankFailure> {
    let value: Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| RankFailure::Malformed(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(RankFailure::NotAnArray);
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(id) => Ok(id),
            _ => Err(RankFailure::NonStringElement),
        })
        .collect()
}

/// Re-sorts resolved roles into `ids` order, silently dropping IDs with no role.
fn order_by_ids(ids: &[String], roles: Vec<Role>) -> Vec<Role> {
    let mut by_id: HashMap<String, Role> = roles
        .into_iter()
        .map(|role| (role.role_id.clone(), role))
        .collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

pub fn build_ranking_prompt(profile: &Profile, sample: &[Role], top_k: usize) -> String {
    let roles = sample
        .iter()
        .map(|r| {
            format!(
                "- role_id: \"{}\", title: \"{}\", skills: [{}]",
                r.role_id,
                r.title,
                r.skills_required.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    RANKING_PROMPT_TEMPLATE
        .replace("{skills}", &join_or_none(&profile.skills))
        .replace("{interests}", &join_or_none(&profile.interests))
        .replace("{qualification}", or_none(&profile.qualification))
        .replace("{sectors}", &join_or_none(&profile.preferred_sectors))
        .replace("{location}", profile.location_preference.as_str())
        .replace("{top_k}", &top_k.to_string())
        .replace("{roles}", &roles)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn or_none(text: &str) -> &str {
    if text.trim().is_empty() {
        "none"
    } else {
        text
    }
}
