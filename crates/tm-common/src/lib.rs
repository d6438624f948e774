pub mod api;
pub mod date;
pub mod error;
pub mod logging;
pub mod matching;
pub mod run_id;
pub mod skill_normalizer;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use date::{AvailabilityWindow, EngagementDuration};

pub use error::{MatchError, ValidationError};
pub use matching::{
    find_matches, MatchFactor, MatchOptions, MatchResult, MatchWeights, MatchingConfig,
    MatchingEngine, MissingFactorPolicy,
};

/// Working arrangement offered by a request or accepted by a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePreference {
    Remote,
    #[default]
    Hybrid,
    Onsite,
}

impl RemotePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemotePreference::Remote => "remote",
            RemotePreference::Hybrid => "hybrid",
            RemotePreference::Onsite => "onsite",
        }
    }
}

/// Budget band the seeker company is willing to pay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub currency: String,
}

/// Rate band a candidate charges, in the request's currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

/// Snapshot of a seeker company's talent request as seen by one matching run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentRequest {
    pub id: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub budget: BudgetRange,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<EngagementDuration>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote_preference: RemotePreference,
}

/// Candidate profile owned by a provider company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentProfile {
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub rate: RateRange,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote_preference: RemotePreference,
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}
