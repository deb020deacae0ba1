use std::collections::HashSet;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{
    DurationPreference, LocationPreference, Profile, StipendExpectation,
};

const MAX_ENTRY_LEN: usize = 100;

/// Body of POST /api/v1/assessment. Omitted fields take the form defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentForm {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub qualification: String,
    pub field_of_study: Option<String>,
    pub preferred_sectors: Vec<String>,
    pub location_preference: LocationPreference,
    pub state_preference: Vec<String>,
    pub city_preference: Vec<String>,
    pub duration_preference: DurationPreference,
    pub stipend_expectation: StipendExpectation,
}

impl AssessmentForm {
    /// Normalizes the form into the profile stored for `user_id`.
    pub fn into_profile(self, user_id: Uuid) -> Result<Profile, AppError> {
        Ok(Profile {
            user_id,
            skills: normalize_entries("skills", self.skills)?,
            interests: normalize_entries("interests", self.interests)?,
            qualification: self.qualification.trim().to_string(),
            field_of_study: self
                .field_of_study
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
            preferred_sectors: normalize_entries("preferred_sectors", self.preferred_sectors)?,
            location_preference: self.location_preference,
            state_preference: normalize_entries("state_preference", self.state_preference)?,
            city_preference: normalize_entries("city_preference", self.city_preference)?,
            duration_preference: self.duration_preference,
            stipend_expectation: self.stipend_expectation,
            updated_at: Utc::now(),
        })
    }
}

/// Trims entries, drops blanks and keeps the first occurrence of each value.
pub fn normalize_entries(field: &str, entries: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(entries.len());

    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.chars().count() > MAX_ENTRY_LEN {
            return Err(AppError::Validation(format!(
                "{field} entries must be at most {MAX_ENTRY_LEN} characters"
            )));
        }
        if seen.insert(entry.to_string()) {
            normalized.push(entry.to_string());
        }
    }

    Ok(normalized)
}
