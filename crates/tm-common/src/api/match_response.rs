use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{MatchResult, MatchRun, MatchWeights};

/// Response of `POST /api/matches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub count: usize,
    /// Weights actually applied, after request overrides.
    pub weights: MatchWeights,
    /// Candidates removed by the skill or budget gate.
    pub excluded: usize,
    /// Candidates ignored because their profile was malformed.
    pub skipped: usize,
    pub cached: bool,
    pub matches: Vec<MatchResult>,
    pub engine_version: String,
    pub matched_at: DateTime<Utc>,
}

impl MatchResponse {
    pub fn from_run(run: MatchRun, request_id: Option<String>, matched_at: DateTime<Utc>) -> Self {
        Self {
            run_id: run.run_id,
            request_id,
            count: run.results.len(),
            weights: run.weights,
            excluded: run.excluded,
            skipped: run.skipped,
            cached: run.cached,
            matches: run.results,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            matched_at,
        }
    }
}
