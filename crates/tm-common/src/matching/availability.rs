use crate::{date::requested_span, TalentProfile, TalentRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityEvaluation {
    /// `None` when there is nothing to compare (no start date or no windows).
    pub score: Option<f64>,
    pub details: String,
}

/// Scores how much of the requested engagement falls inside the candidate's
/// availability. The best single window wins; windows are not stitched together.
pub fn evaluate_availability(
    request: &TalentRequest,
    profile: &TalentProfile,
) -> AvailabilityEvaluation {
    let Some(start_date) = request.start_date else {
        return AvailabilityEvaluation {
            score: None,
            details: "no start date requested".into(),
        };
    };

    if profile.availability.is_empty() {
        return AvailabilityEvaluation {
            score: None,
            details: "candidate availability unknown".into(),
        };
    }

    let (start, end) = requested_span(start_date, request.duration.as_ref());
    let requested_days = (end - start).num_days() as u64 + 1;

    if profile.availability.iter().any(|w| w.contains(start, end)) {
        return AvailabilityEvaluation {
            score: Some(1.0),
            details: format!("available for all {requested_days} days from {start}"),
        };
    }

    let best_overlap = profile
        .availability
        .iter()
        .map(|w| w.overlap_days(start, end))
        .max()
        .unwrap_or(0);

    if best_overlap == 0 {
        return AvailabilityEvaluation {
            score: Some(0.0),
            details: format!("not available between {start} and {end}"),
        };
    }

    AvailabilityEvaluation {
        score: Some(best_overlap as f64 / requested_days as f64),
        details: format!(
            "available for {best_overlap} of {requested_days} days from {start}"
        ),
    }
}
