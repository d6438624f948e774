use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    availability::evaluate_availability,
    budget::evaluate_budget,
    config::MissingFactorPolicy,
    filters::{FilterDecision, HardFilterResult},
    location::evaluate_location,
    reputation::evaluate_reputation,
    skills::evaluate_skills,
    weights::{MatchFactor, MatchWeights},
};
use crate::{TalentProfile, TalentRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    /// `None` when the factor had no data to score.
    pub score: Option<f64>,
    pub details: String,
}

/// Everything known about one candidate before weights are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEvaluation {
    pub profile_id: String,
    pub factors: BTreeMap<MatchFactor, FactorScore>,
    pub filters: HardFilterResult,
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub profile_id: String,
    /// Composite score in 0.0..=1.0.
    pub score: f64,
    /// Per-factor scores that took part in the composite.
    pub breakdown: BTreeMap<MatchFactor, f64>,
    pub explanation: String,
}

/// Composite score plus the factor scores it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    pub score: f64,
    pub breakdown: BTreeMap<MatchFactor, f64>,
}

/// Runs every matcher and hard filter for one candidate.
pub fn evaluate_candidate(request: &TalentRequest, profile: &TalentProfile) -> CandidateEvaluation {
    let skills = evaluate_skills(
        &request.required_skills,
        &request.preferred_skills,
        &profile.skills,
    );
    let budget = evaluate_budget(&request.budget, &profile.rate);
    let location = evaluate_location(request, profile);
    let availability = evaluate_availability(request, profile);
    let reputation = evaluate_reputation(profile.rating, profile.review_count);

    let filters = HardFilterResult::new(vec![
        (
            "required_skills",
            if skills.is_knockout {
                FilterDecision::Reject {
                    reason: skills.reason.clone(),
                }
            } else {
                FilterDecision::Pass
            },
        ),
        (
            "budget",
            if budget.is_knockout {
                FilterDecision::Reject {
                    reason: budget.details.clone(),
                }
            } else {
                FilterDecision::Pass
            },
        ),
    ]);

    let factors = BTreeMap::from([
        (
            MatchFactor::Skills,
            FactorScore {
                score: Some(skills.score),
                details: skills.reason,
            },
        ),
        (
            MatchFactor::Budget,
            FactorScore {
                score: Some(budget.score),
                details: budget.details,
            },
        ),
        (
            MatchFactor::Location,
            FactorScore {
                score: Some(location.score),
                details: location.details,
            },
        ),
        (
            MatchFactor::Availability,
            FactorScore {
                score: availability.score,
                details: availability.details,
            },
        ),
        (
            MatchFactor::Reputation,
            FactorScore {
                score: reputation.score,
                details: reputation.details,
            },
        ),
    ]);

    CandidateEvaluation {
        profile_id: profile.id.clone(),
        factors,
        filters,
    }
}

/// Weighted mean of factor scores: `Σ(wᵢ·sᵢ) / Σ(wᵢ)` over the breakdown.
///
/// Under `Exclude` the breakdown only holds scored factors; under `Zero`
/// unscored factors enter it as 0.0. Either way the returned score can be
/// recomputed from the returned breakdown alone. A zero weight sum yields 0.0.
pub fn combine_scores(
    scores: &BTreeMap<MatchFactor, Option<f64>>,
    weights: &MatchWeights,
    policy: MissingFactorPolicy,
) -> Composite {
    let breakdown: BTreeMap<MatchFactor, f64> = scores
        .iter()
        .filter_map(|(factor, score)| match (score, policy) {
            (Some(score), _) => Some((*factor, *score)),
            (None, MissingFactorPolicy::Zero) => Some((*factor, 0.0)),
            (None, MissingFactorPolicy::Exclude) => None,
        })
        .collect();

    Composite {
        score: weighted_mean(&breakdown, weights),
        breakdown,
    }
}

pub fn weighted_mean(breakdown: &BTreeMap<MatchFactor, f64>, weights: &MatchWeights) -> f64 {
    // The mean is scale-invariant; dividing by the largest weight keeps the
    // sums finite for any finite weights.
    let largest = breakdown
        .keys()
        .map(|factor| weights.get(*factor))
        .fold(0.0_f64, f64::max);
    if !(largest.is_finite() && largest > 0.0) {
        return 0.0;
    }

    let (numerator, denominator) = breakdown
        .iter()
        .fold((0.0_f64, 0.0_f64), |(num, den), (factor, score)| {
            let weight = weights.get(*factor) / largest;
            (num + weight * score, den + weight)
        });

    let mean = numerator / denominator;
    if denominator > 0.0 && mean.is_finite() {
        mean.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl CandidateEvaluation {
    pub fn composite(&self, weights: &MatchWeights, policy: MissingFactorPolicy) -> Composite {
        let scores = self
            .factors
            .iter()
            .map(|(factor, fs)| (*factor, fs.score))
            .collect();
        combine_scores(&scores, weights, policy)
    }

    /// Human-readable summary, one clause per factor.
    pub fn explanation(&self, composite: &Composite) -> String {
        let clauses: Vec<String> = self
            .factors
            .iter()
            .map(|(factor, fs)| match composite.breakdown.get(factor) {
                Some(score) if fs.score.is_some() => format!("{factor} {score:.2}: {}", fs.details),
                Some(score) => format!("{factor} {score:.2} (missing): {}", fs.details),
                None => format!("{factor} n/a: {}", fs.details),
            })
            .collect();

        format!("match {:.2} | {}", composite.score, clauses.join(" | "))
    }

    pub fn into_match_result(self, weights: &MatchWeights, policy: MissingFactorPolicy) -> MatchResult {
        let composite = self.composite(weights, policy);
        let explanation = self.explanation(&composite);

        MatchResult {
            profile_id: self.profile_id,
            score: composite.score,
            breakdown: composite.breakdown,
            explanation,
        }
    }
}
