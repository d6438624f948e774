use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use super::{
    cache::{cache_key, CacheStats, CachedRun, MatchCache},
    config::MatchingConfig,
    scoring::{evaluate_candidate, MatchResult},
    validation::{validate_profile, validate_request},
    weights::MatchWeights,
};
use crate::{
    error::{MatchError, ValidationError},
    run_id, TalentProfile, TalentRequest,
};

/// Per-call knobs for a matching run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Maximum number of results; `None` returns every qualifying candidate.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Factor name to weight. Unnamed factors keep the configured weight.
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,
}

/// Ranked results plus bookkeeping about how they were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRun {
    pub run_id: String,
    pub weights: MatchWeights,
    pub results: Vec<MatchResult>,
    /// Candidates removed by a hard filter.
    pub excluded: usize,
    /// Candidates dropped because their profile failed validation.
    pub skipped: usize,
    pub cached: bool,
}

pub struct MatchingEngine {
    config: MatchingConfig,
    cache: Option<MatchCache>,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

impl MatchingEngine {
    /// Weights are checked again on every run, so a config with invalid
    /// weights fails each call instead of producing scores.
    pub fn new(config: MatchingConfig) -> Self {
        let cache = (config.cache_capacity > 0).then(|| MatchCache::new(config.cache_capacity));
        Self { config, cache }
    }

    /// Like `new`, but rejects invalid weights up front.
    pub fn try_new(config: MatchingConfig) -> Result<Self, ValidationError> {
        config.weights.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(MatchCache::stats)
    }

    /// Scores every candidate, drops hard-filter failures, and returns the
    /// survivors by descending composite score (ties broken by profile id).
    pub fn run_matching(
        &self,
        request: &TalentRequest,
        pool: &[TalentProfile],
        options: &MatchOptions,
    ) -> Result<MatchRun, MatchError> {
        validate_request(request)?;
        if options.limit == Some(0) {
            return Err(ValidationError::new("limit", "must be a positive integer").into());
        }

        let weights = match &options.weights {
            Some(overrides) => self.config.weights.with_overrides(overrides)?,
            None => self.config.weights,
        };
        weights.validate()?;
        let policy = self.config.missing_factor_policy;

        let run_id = run_id::generate();
        let span = info_span!("match_run", %run_id, request_id = %request.id, pool = pool.len());
        let _guard = span.enter();

        let key = self
            .cache
            .as_ref()
            .and_then(|_| cache_key(request, pool, &weights, policy, options.limit));
        let hit = match (&self.cache, &key) {
            (Some(cache), Some(key)) => cache.get(key),
            _ => None,
        };
        let cached = hit.is_some();

        let run = match hit {
            Some(run) => run,
            None => {
                let run = self.rank(request, pool, &weights, options.limit);
                if let (Some(cache), Some(key)) = (&self.cache, key) {
                    cache.insert(key, run.clone());
                }
                run
            }
        };

        info!(
            returned = run.results.len(),
            excluded = run.excluded,
            skipped = run.skipped,
            cached,
            top_score = run.results.first().map(|r| r.score),
            "match run complete"
        );

        Ok(MatchRun {
            run_id,
            weights,
            results: run.results,
            excluded: run.excluded,
            skipped: run.skipped,
            cached,
        })
    }

    fn rank(
        &self,
        request: &TalentRequest,
        pool: &[TalentProfile],
        weights: &MatchWeights,
        limit: Option<usize>,
    ) -> CachedRun {
        let policy = self.config.missing_factor_policy;
        let mut excluded = 0;
        let mut skipped = 0;
        let mut results = Vec::with_capacity(pool.len());

        for profile in pool {
            if let Err(err) = validate_profile(profile) {
                warn!(profile_id = %profile.id, error = %err, "skipping invalid profile");
                skipped += 1;
                continue;
            }

            let evaluation = evaluate_candidate(request, profile);
            if evaluation.filters.is_rejected {
                debug!(
                    profile_id = %profile.id,
                    reasons = ?evaluation.filters.rejection_reasons(),
                    "candidate excluded"
                );
                excluded += 1;
                continue;
            }

            results.push(evaluation.into_match_result(weights, policy));
        }

        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.profile_id.cmp(&b.profile_id))
        });
        if let Some(limit) = limit {
            results.truncate(limit);
        }

        CachedRun {
            results,
            excluded,
            skipped,
        }
    }

    pub fn find_matches(
        &self,
        request: &TalentRequest,
        pool: &[TalentProfile],
        options: &MatchOptions,
    ) -> Result<Vec<MatchResult>, MatchError> {
        self.run_matching(request, pool, options).map(|run| run.results)
    }
}

/// One-shot ranking with the default weights and no cache.
pub fn find_matches(
    request: &TalentRequest,
    pool: &[TalentProfile],
    options: &MatchOptions,
) -> Result<Vec<MatchResult>, MatchError> {
    MatchingEngine::new(MatchingConfig::uncached()).find_matches(request, pool, options)
}
