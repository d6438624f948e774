use serde::{Deserialize, Serialize};

/// Unit of an engagement duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[serde(alias = "day")]
    Days,
    #[serde(alias = "week")]
    Weeks,
    /// Counted as 30 days.
    #[serde(alias = "month")]
    Months,
}

impl DurationUnit {
    pub fn days_per_unit(&self) -> f64 {
        match self {
            DurationUnit::Days => 1.0,
            DurationUnit::Weeks => 7.0,
            DurationUnit::Months => 30.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        }
    }
}

/// Requested engagement length, e.g. `{"value": 3, "unit": "months"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementDuration {
    pub value: f64,
    pub unit: DurationUnit,
}

impl EngagementDuration {
    pub fn days(value: f64) -> Self {
        Self {
            value,
            unit: DurationUnit::Days,
        }
    }

    pub fn weeks(value: f64) -> Self {
        Self {
            value,
            unit: DurationUnit::Weeks,
        }
    }

    pub fn months(value: f64) -> Self {
        Self {
            value,
            unit: DurationUnit::Months,
        }
    }

    /// Whole days covered, rounding partial days up. Callers validate that
    /// `value` is finite and non-negative first; anything else maps to 0.
    pub fn to_days(&self) -> u64 {
        let days = (self.value * self.unit.days_per_unit()).ceil();
        if days.is_finite() && days > 0.0 {
            days as u64
        } else {
            0
        }
    }
}
