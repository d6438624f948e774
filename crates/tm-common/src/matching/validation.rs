use crate::{error::ValidationError, TalentProfile, TalentRequest};

use super::reputation::MAX_RATING;

/// Rejects requests that would produce meaningless scores.
pub fn validate_request(request: &TalentRequest) -> Result<(), ValidationError> {
    if request.id.trim().is_empty() {
        return Err(ValidationError::new("id", "must not be blank"));
    }

    for (index, skill) in request.required_skills.iter().enumerate() {
        if skill.trim().is_empty() {
            return Err(ValidationError::new(
                format!("required_skills[{index}]"),
                "must not be blank",
            ));
        }
    }

    let budget = &request.budget;
    if !budget.min.is_finite() || !budget.max.is_finite() {
        return Err(ValidationError::new("budget", "min and max must be finite numbers"));
    }
    if budget.min < 0.0 {
        return Err(ValidationError::new("budget.min", "must not be negative"));
    }
    if budget.min > budget.max {
        return Err(ValidationError::new(
            "budget.min",
            format!("{} exceeds budget.max {}", budget.min, budget.max),
        ));
    }

    if let Some(duration) = &request.duration {
        if !duration.value.is_finite() {
            return Err(ValidationError::new("duration.value", "must be a finite number"));
        }
        if duration.value < 0.0 {
            return Err(ValidationError::new("duration.value", "must not be negative"));
        }
    }

    Ok(())
}

/// Checks a candidate profile. Invalid profiles are skipped by the engine
/// rather than failing the whole run.
pub fn validate_profile(profile: &TalentProfile) -> Result<(), ValidationError> {
    let field = |name: &str| format!("profiles[{}].{name}", profile.id);

    if profile.id.trim().is_empty() {
        return Err(ValidationError::new("profiles[].id", "must not be blank"));
    }

    let rate = &profile.rate;
    if !rate.min.is_finite() || !rate.max.is_finite() {
        return Err(ValidationError::new(field("rate"), "min and max must be finite numbers"));
    }
    if rate.min < 0.0 {
        return Err(ValidationError::new(field("rate.min"), "must not be negative"));
    }
    if rate.min > rate.max {
        return Err(ValidationError::new(
            field("rate.min"),
            format!("{} exceeds rate.max {}", rate.min, rate.max),
        ));
    }

    if let Some(rating) = profile.rating {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::new(field("rating"), "must be between 0 and 5"));
        }
    }

    for (index, window) in profile.availability.iter().enumerate() {
        if window.start > window.end {
            return Err(ValidationError::new(
                field(&format!("availability[{index}]")),
                format!("start {} is after end {}", window.start, window.end),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        date::{AvailabilityWindow, EngagementDuration},
        BudgetRange, RateRange,
    };

    fn request() -> TalentRequest {
        TalentRequest {
            id: "req-1".into(),
            required_skills: vec!["Rust".into()],
            budget: BudgetRange {
                min: 80.0,
                max: 120.0,
                currency: "USD".into(),
            },
            ..TalentRequest::default()
        }
    }

    fn profile() -> TalentProfile {
        TalentProfile {
            id: "p-1".into(),
            rate: RateRange {
                min: 90.0,
                max: 110.0,
            },
            ..TalentProfile::default()
        }
    }

    #[test]
    fn accepts_well_formed_inputs() {
        assert!(validate_request(&request()).is_ok());
        assert!(validate_profile(&profile()).is_ok());
    }

    #[test]
    fn rejects_inverted_budget() {
        let mut req = request();
        req.budget.min = 150.0;

        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.field, "budget.min");
        assert!(err.reason.contains("exceeds"));
    }

    #[test]
    fn rejects_negative_duration() {
        let mut req = request();
        req.duration = Some(EngagementDuration::weeks(-2.0));

        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.field, "duration.value");
    }

    #[test]
    fn rejects_blank_identifiers_and_skills() {
        let mut req = request();
        req.id = "  ".into();
        assert_eq!(validate_request(&req).unwrap_err().field, "id");

        let mut req = request();
        req.required_skills.push(" ".into());
        assert_eq!(validate_request(&req).unwrap_err().field, "required_skills[1]");
    }

    #[test]
    fn rejects_malformed_profiles() {
        let mut inverted = profile();
        inverted.rate.min = 200.0;
        assert_eq!(validate_profile(&inverted).unwrap_err().field, "profiles[p-1].rate.min");

        let mut rating = profile();
        rating.rating = Some(7.5);
        assert!(validate_profile(&rating).is_err());

        let mut window = profile();
        window.availability = vec![AvailabilityWindow::new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )];
        assert_eq!(
            validate_profile(&window).unwrap_err().field,
            "profiles[p-1].availability[0]"
        );
    }
}
