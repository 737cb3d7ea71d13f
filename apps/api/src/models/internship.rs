use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// Work-mode enumeration shared by postings and preference records.
/// `Any` is a requester-side wildcard; postings always carry a concrete mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
    Any,
}

impl WorkMode {
    /// Whether this requester preference accepts a posting's mode string.
    pub fn accepts(&self, posting_mode: &str) -> bool {
        match self {
            WorkMode::Any => true,
            WorkMode::Remote => posting_mode == "remote",
            WorkMode::Onsite => posting_mode == "onsite",
            WorkMode::Hybrid => posting_mode == "hybrid",
        }
    }
}

/// A candidate internship opportunity. Persisted in the `internships` table;
/// `required_skills` order is load-bearing for the matched-skills output.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub sector: String,
    pub work_mode: String,
    pub education_level: String,
    pub is_active: bool,
}

/// A requester's stated matching criteria.
///
/// Every set-valued field defaults to empty when absent from the request
/// body, so a sparse payload scores zero on those dimensions instead of
/// failing. `work_mode` is optional: absent means "no stated preference",
/// which never matches (the `any` wildcard must be explicit).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub preferred_cities: Vec<String>,
    #[serde(default)]
    pub work_mode: Option<WorkMode>,
    #[serde(default)]
    pub sector_interest: Vec<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub stipend: Option<String>,
}

impl PreferenceRecord {
    /// Boundary validation, applied before scoring or persistence.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(cgpa) = self.cgpa {
            if !cgpa.is_finite() || !(0.0..=10.0).contains(&cgpa) {
                return Err(AppError::Validation(
                    "cgpa must be between 0.0 and 10.0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A posting augmented with its match score and the required skills the
/// requester covers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub score: u32,
    pub matching_skills: Vec<String>,
}
