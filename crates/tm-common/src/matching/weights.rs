use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Scoring dimensions combined into the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFactor {
    Skills,
    Budget,
    Location,
    Availability,
    Reputation,
}

impl MatchFactor {
    pub const ALL: [MatchFactor; 5] = [
        MatchFactor::Skills,
        MatchFactor::Budget,
        MatchFactor::Location,
        MatchFactor::Availability,
        MatchFactor::Reputation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchFactor::Skills => "skills",
            MatchFactor::Budget => "budget",
            MatchFactor::Location => "location",
            MatchFactor::Availability => "availability",
            MatchFactor::Reputation => "reputation",
        }
    }
}

impl fmt::Display for MatchFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchFactor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MatchFactor::ALL
            .into_iter()
            .find(|factor| factor.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::new(format!("weights.{needle}"), "unknown match factor"))
    }
}

/// Default weighting: skills dominate, then budget fit, with location and
/// timing as tie-breakers and reputation as a light signal.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.35,
    budget: 0.25,
    location: 0.15,
    availability: 0.15,
    reputation: 0.10,
};

/// Per-factor weights. Need not sum to 1; the composite divides by the sum of
/// the weights that take part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub budget: f64,
    pub location: f64,
    pub availability: f64,
    pub reputation: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MatchWeights {
    pub fn get(&self, factor: MatchFactor) -> f64 {
        match factor {
            MatchFactor::Skills => self.skills,
            MatchFactor::Budget => self.budget,
            MatchFactor::Location => self.location,
            MatchFactor::Availability => self.availability,
            MatchFactor::Reputation => self.reputation,
        }
    }

    pub fn set(&mut self, factor: MatchFactor, weight: f64) {
        match factor {
            MatchFactor::Skills => self.skills = weight,
            MatchFactor::Budget => self.budget = weight,
            MatchFactor::Location => self.location = weight,
            MatchFactor::Availability => self.availability = weight,
            MatchFactor::Reputation => self.reputation = weight,
        }
    }

    pub fn sum(&self) -> f64 {
        MatchFactor::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Every weight finite and non-negative, and the total finite so the
    /// composite denominator cannot overflow.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for factor in MatchFactor::ALL {
            check_weight(factor, self.get(factor))?;
        }
        if !self.sum().is_finite() {
            return Err(ValidationError::new("weights", "sum of weights must be finite"));
        }
        Ok(())
    }

    /// Applies a name → weight map on top of `self`. Factors not named keep
    /// their current weight; unknown names and negative or non-finite weights
    /// are rejected.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, f64>) -> Result<Self, ValidationError> {
        let mut weights = *self;
        for (name, weight) in overrides {
            let factor: MatchFactor = name.parse()?;
            check_weight(factor, *weight)?;
            weights.set(factor, *weight);
        }
        weights.validate()?;
        Ok(weights)
    }
}

fn check_weight(factor: MatchFactor, weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() {
        return Err(ValidationError::new(
            format!("weights.{factor}"),
            "must be a finite number",
        ));
    }
    if weight < 0.0 {
        return Err(ValidationError::new(
            format!("weights.{factor}"),
            "must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn overrides_replace_named_factors_only() {
        let overrides = BTreeMap::from([("Budget".to_string(), 0.5), ("reputation".to_string(), 0.0)]);
        let weights = DEFAULT_WEIGHTS.with_overrides(&overrides).unwrap();

        assert_eq!(weights.budget, 0.5);
        assert_eq!(weights.reputation, 0.0);
        assert_eq!(weights.skills, DEFAULT_WEIGHTS.skills);
    }

    #[test]
    fn rejects_unknown_factor_names() {
        let overrides = BTreeMap::from([("seniority".to_string(), 0.2)]);
        let err = DEFAULT_WEIGHTS.with_overrides(&overrides).unwrap_err();
        assert_eq!(err.field, "weights.seniority");
    }

    #[test]
    fn rejects_negative_and_nan_weights() {
        let negative = BTreeMap::from([("skills".to_string(), -0.1)]);
        assert!(DEFAULT_WEIGHTS.with_overrides(&negative).is_err());

        let mut weights = DEFAULT_WEIGHTS;
        weights.location = f64::NAN;
        let err = weights.validate().unwrap_err();
        assert_eq!(err.field, "weights.location");
    }

    #[test]
    fn rejects_overrides_whose_total_overflows() {
        let overrides = BTreeMap::from([("skills".to_string(), 1e308), ("budget".to_string(), 1e308)]);
        let err = DEFAULT_WEIGHTS.with_overrides(&overrides).unwrap_err();
        assert_eq!(err.field, "weights");

        let mut weights = DEFAULT_WEIGHTS;
        weights.skills = f64::MAX;
        weights.reputation = f64::MAX;
        assert!(weights.validate().is_err());

        let single = BTreeMap::from([("skills".to_string(), 1e308)]);
        assert!(DEFAULT_WEIGHTS.with_overrides(&single).is_ok());
    }

    #[test]
    fn factors_parse_case_insensitively() {
        assert_eq!("Availability".parse::<MatchFactor>().unwrap(), MatchFactor::Availability);
        assert_eq!(MatchFactor::Skills.to_string(), "skills");
    }
}
