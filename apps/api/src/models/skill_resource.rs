use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Learning links for a single skill, surfaced next to a role's missing skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SkillResource {
    pub skill_name: String,
    pub youtube_link: Option<String>,
    pub docs_link: Option<String>,
    pub practice_link: Option<String>,
}
