//! Fallback ranker: deterministic skill-overlap scoring with no network dependency.
//!
//! Algorithm:
//! 1. For each role: score = |skills_required ∩ profile.skills| / |skills_required|
//!    (duplicate required skills count once; no required skills → 0.0)
//! 2. Stable sort by score descending, so equal scores keep catalog order
//! 3. Truncate to the ranker limit (10 by default)

use std::collections::HashSet;

use crate::models::profile::Profile;
use crate::models::role::Role;
use crate::recommendation::{ScoredRole, MAX_RECOMMENDATIONS};

#[derive(Debug, Clone)]
pub struct FallbackRanker {
    limit: usize,
}

impl Default for FallbackRanker {
    fn default() -> Self {
        Self {
            limit: MAX_RECOMMENDATIONS,
        }
    }
}

impl FallbackRanker {
    pub fn rank(&self, profile: &Profile, catalog: &[Role]) -> Vec<ScoredRole> {
        let user_skills: HashSet<&str> = profile.skills.iter().map(String::as_str).collect();

        let mut scored: Vec<ScoredRole> = catalog
            .iter()
            .map(|role| score_role(&user_skills, role))
            .collect();

        // Vec::sort_by is stable.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.limit);
        scored
    }
}

/// Scores one role against the user's skill set and lists what is missing.
pub fn score_role(user_skills: &HashSet<&str>, role: &Role) -> ScoredRole {
    let mut seen = HashSet::new();
    let required: Vec<&String> = role
        .skills_required
        .iter()
        .filter(|skill| seen.insert(skill.as_str()))
        .collect();

    let matched = required
        .iter()
        .filter(|skill| user_skills.contains(skill.as_str()))
        .count();

    let score = if required.is_empty() {
        0.0
    } else {
        matched as f64 / required.len() as f64
    };

    let missing_skills = required
        .into_iter()
        .filter(|skill| !user_skills.contains(skill.as_str()))
        .cloned()
        .collect();

    ScoredRole {
        role: role.clone(),
        score,
        missing_skills,
    }
}
