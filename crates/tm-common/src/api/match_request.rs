use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{matching::MatchOptions, TalentProfile, TalentRequest};

/// Body of `POST /api/matches`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequestBody {
    pub request: TalentRequest,
    #[serde(default)]
    pub candidates: Vec<TalentProfile>,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Factor name to weight, merged over the server defaults.
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,
}

impl MatchRequestBody {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            limit: self.limit,
            weights: self.weights.clone(),
        }
    }
}
