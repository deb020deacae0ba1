use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the student wants to work. Serialized with the labels the assessment form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationPreference {
    #[serde(rename = "Work from Home")]
    WorkFromHome,
    #[serde(rename = "In-office")]
    InOffice,
    #[default]
    #[serde(rename = "Hybrid")]
    Hybrid,
}

impl LocationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationPreference::WorkFromHome => "Work from Home",
            LocationPreference::InOffice => "In-office",
            LocationPreference::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for LocationPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Work from Home" => Ok(LocationPreference::WorkFromHome),
            "In-office" => Ok(LocationPreference::InOffice),
            "Hybrid" => Ok(LocationPreference::Hybrid),
            other => Err(format!("unknown location preference '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationPreference {
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "2 Months")]
    TwoMonths,
    #[default]
    #[serde(rename = "3 Months")]
    ThreeMonths,
    #[serde(rename = "6 Months")]
    SixMonths,
}

impl DurationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationPreference::OneMonth => "1 Month",
            DurationPreference::TwoMonths => "2 Months",
            DurationPreference::ThreeMonths => "3 Months",
            DurationPreference::SixMonths => "6 Months",
        }
    }
}

impl FromStr for DurationPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1 Month" => Ok(DurationPreference::OneMonth),
            "2 Months" => Ok(DurationPreference::TwoMonths),
            "3 Months" => Ok(DurationPreference::ThreeMonths),
            "6 Months" => Ok(DurationPreference::SixMonths),
            other => Err(format!("unknown duration preference '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StipendExpectation {
    #[default]
    Any,
    Paid,
    #[serde(rename = "10k+")]
    TenKPlus,
    #[serde(rename = "20k+")]
    TwentyKPlus,
}

impl StipendExpectation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StipendExpectation::Any => "Any",
            StipendExpectation::Paid => "Paid",
            StipendExpectation::TenKPlus => "10k+",
            StipendExpectation::TwentyKPlus => "20k+",
        }
    }
}

impl FromStr for StipendExpectation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Any" => Ok(StipendExpectation::Any),
            "Paid" => Ok(StipendExpectation::Paid),
            "10k+" => Ok(StipendExpectation::TenKPlus),
            "20k+" => Ok(StipendExpectation::TwentyKPlus),
            other => Err(format!("unknown stipend expectation '{other}'")),
        }
    }
}

/// A student's stored assessment. One per user, overwritten wholesale on resubmission.
///
/// `skills`, `interests` and `preferred_sectors` have set semantics: the assessment
/// handler de-duplicates them before they are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
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
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// A profile without skills is treated the same as no profile at all.
    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}
