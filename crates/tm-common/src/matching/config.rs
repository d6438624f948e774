use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::weights::{MatchFactor, MatchWeights, DEFAULT_WEIGHTS};
use crate::error::ValidationError;

/// How the aggregator treats a factor that could not be scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFactorPolicy {
    /// Left out of the numerator and the denominator; the composite is the
    /// weighted mean of the factors that were scored.
    #[default]
    Exclude,
    /// Counted as 0.0 with its weight kept in the denominator.
    Zero,
}

impl FromStr for MissingFactorPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude" => Ok(MissingFactorPolicy::Exclude),
            "zero" => Ok(MissingFactorPolicy::Zero),
            other => Err(ValidationError::new(
                "missing_factor_policy",
                format!("expected exclude or zero, got {other:?}"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub weights: MatchWeights,
    pub missing_factor_policy: MissingFactorPolicy,
    /// Entries kept by the result cache; 0 disables caching.
    pub cache_capacity: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            missing_factor_policy: MissingFactorPolicy::Exclude,
            cache_capacity: 256,
        }
    }
}

impl MatchingConfig {
    /// Without a cache, for callers that only rank once.
    pub fn uncached() -> Self {
        Self {
            cache_capacity: 0,
            ..Self::default()
        }
    }

    /// Reads `TM_WEIGHT_<FACTOR>`, `TM_MISSING_FACTOR_POLICY` and
    /// `TM_MATCH_CACHE_CAPACITY`. Unparseable or invalid values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `from_env` over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |name: &str| lookup(name).map(|raw| raw.trim().to_string());

        let mut weights = defaults.weights;
        for factor in MatchFactor::ALL {
            let var = format!("TM_WEIGHT_{}", factor.as_str().to_ascii_uppercase());
            if let Some(raw) = parse(&var) {
                match raw.parse::<f64>() {
                    Ok(value) => weights.set(factor, value),
                    Err(_) => warn!(var = %var, value = %raw, "ignoring unparseable weight"),
                }
            }
        }
        let weights = match weights.validate() {
            Ok(()) => weights,
            Err(err) => {
                warn!(error = %err, "ignoring TM_WEIGHT_* overrides");
                defaults.weights
            }
        };

        let missing_factor_policy = parse("TM_MISSING_FACTOR_POLICY")
            .and_then(|raw| match raw.parse() {
                Ok(policy) => Some(policy),
                Err(err) => {
                    warn!(error = %err, "ignoring TM_MISSING_FACTOR_POLICY");
                    None
                }
            })
            .unwrap_or(defaults.missing_factor_policy);

        let cache_capacity = parse("TM_MATCH_CACHE_CAPACITY")
            .and_then(|raw| match raw.parse::<usize>() {
                Ok(capacity) => Some(capacity),
                Err(_) => {
                    warn!(value = %raw, "ignoring TM_MATCH_CACHE_CAPACITY");
                    None
                }
            })
            .unwrap_or(defaults.cache_capacity);

        Self {
            weights,
            missing_factor_policy,
            cache_capacity,
        }
    }
}
