use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::models::role::Role;
use crate::models::skill_resource::SkillResource;
use crate::store::{ProfileStore, RoleCatalog, SkillResourceStore, StoreError};

const ROLE_COLUMNS: &str = "role_id, title, company, location, stipend, duration, description, \
     skills_required, apply_link, date_posted";

/// Raw `profiles` row. Enum columns are stored as their display labels.
#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: Uuid,
    skills: Vec<String>,
    interests: Vec<String>,
    qualification: String,
    field_of_study: Option<String>,
    preferred_sectors: Vec<String>,
    location_preference: String,
    state_preference: Vec<String>,
    city_preference: Vec<String>,
    duration_preference: String,
    stipend_expectation: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = StoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            user_id: row.user_id,
            skills: row.skills,
            interests: row.interests,
            qualification: row.qualification,
            field_of_study: row.field_of_study,
            preferred_sectors: row.preferred_sectors,
            location_preference: row.location_preference.parse().map_err(StoreError::Corrupt)?,
            state_preference: row.state_preference,
            city_preference: row.city_preference,
            duration_preference: row.duration_preference.parse().map_err(StoreError::Corrupt)?,
            stipend_expectation: row.stipend_expectation.parse().map_err(StoreError::Corrupt)?,
            updated_at: row.updated_at,
        })
    }
}

/// Postgres rejects LIMIT values above i64::MAX, so "everything" is clamped.
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (user_id, skills, interests, qualification, field_of_study, preferred_sectors,
                 location_preference, state_preference, city_preference,
                 duration_preference, stipend_expectation, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (user_id) DO UPDATE SET
                skills = EXCLUDED.skills,
                interests = EXCLUDED.interests,
                qualification = EXCLUDED.qualification,
                field_of_study = EXCLUDED.field_of_study,
                preferred_sectors = EXCLUDED.preferred_sectors,
                location_preference = EXCLUDED.location_preference,
                state_preference = EXCLUDED.state_preference,
                city_preference = EXCLUDED.city_preference,
                duration_preference = EXCLUDED.duration_preference,
                stipend_expectation = EXCLUDED.stipend_expectation,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.skills)
        .bind(&profile.interests)
        .bind(&profile.qualification)
        .bind(&profile.field_of_study)
        .bind(&profile.preferred_sectors)
        .bind(profile.location_preference.as_str())
        .bind(&profile.state_preference)
        .bind(&profile.city_preference)
        .bind(profile.duration_preference.as_str())
        .bind(profile.stipend_expectation.as_str())
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await?;

        debug!("Upserted profile for user {}", profile.user_id);
        Profile::try_from(row)
    }
}

#[derive(Clone)]
pub struct PgRoleCatalog {
    pool: PgPool,
}

impl PgRoleCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleCatalog for PgRoleCatalog {
    async fn sample_roles(&self, n: usize) -> Result<Vec<Role>, StoreError> {
        let roles = sqlx::query_as::<_, Role>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles ORDER BY random() LIMIT $1"
        ))
        .bind(sql_limit(n))
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }

    async fn list_all_roles(&self, limit: usize) -> Result<Vec<Role>, StoreError> {
        let roles = sqlx::query_as::<_, Role>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles ORDER BY seq ASC LIMIT $1"
        ))
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }

    async fn list_recent_roles(&self, limit: usize) -> Result<Vec<Role>, StoreError> {
        let roles = sqlx::query_as::<_, Role>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles ORDER BY date_posted DESC, seq ASC LIMIT $1"
        ))
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }

    async fn find_roles_by_ids(&self, ids: &[String]) -> Result<Vec<Role>, StoreError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let roles = sqlx::query_as::<_, Role>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles WHERE role_id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }
}

#[derive(Clone)]
pub struct PgSkillResourceStore {
    pool: PgPool,
}

impl PgSkillResourceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillResourceStore for PgSkillResourceStore {
    async fn find_by_skill_name(
        &self,
        skill_name: &str,
    ) -> Result<Option<SkillResource>, StoreError> {
        let resource = sqlx::query_as::<_, SkillResource>(
            r#"
            SELECT skill_name, youtube_link, docs_link, practice_link
            FROM skill_resources
            WHERE LOWER(skill_name) = LOWER($1)
            LIMIT 1
            "#,
        )
        .bind(skill_name.trim())
        .fetch_optional(&self.pool)
        .await?;
        Ok(resource)
    }
}
