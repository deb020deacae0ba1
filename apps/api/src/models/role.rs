use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An internship posting from the role catalog. Read-only to the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub role_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub stipend: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    /// Ordered as posted; may contain duplicates from hand-entered data.
    pub skills_required: Vec<String>,
    pub apply_link: Option<String>,
    pub date_posted: DateTime<Utc>,
}
