use crate::{RemotePreference, TalentProfile, TalentRequest};

const SAME_LOCATION_BONUS: f64 = 0.2;
const HYBRID_DISTANCE_PENALTY: f64 = 0.1;
const ONSITE_DISTANCE_PENALTY: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationEvaluation {
    pub score: f64, // 0.0..=1.0
    pub details: String,
}

/// Trimmed, whitespace-collapsed, lowercased location; `None` when blank.
pub fn normalize_location(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}

/// Compatibility of working arrangements before any city adjustment.
/// Remote requests against onsite-only candidates stay above zero so a
/// recruiter can still pick them by hand.
fn arrangement_score(requested: RemotePreference, offered: RemotePreference) -> f64 {
    use RemotePreference::*;

    match (requested, offered) {
        (Remote, Remote) => 1.0,
        (Remote, Hybrid) => 0.8,
        (Remote, Onsite) => 0.2,
        (Hybrid, Remote) => 0.6,
        (Hybrid, Hybrid) => 0.8,
        (Hybrid, Onsite) => 0.7,
        (Onsite, Remote) => 0.3,
        (Onsite, Hybrid) => 0.6,
        (Onsite, Onsite) => 0.8,
    }
}

/// Scores location fit from remote preferences and, when the request needs
/// presence, from the literal location strings.
pub fn evaluate_location(request: &TalentRequest, profile: &TalentProfile) -> LocationEvaluation {
    let requested = request.remote_preference;
    let offered = profile.remote_preference;
    let base = arrangement_score(requested, offered);
    let arrangement = format!("{} vs {}", requested.as_str(), offered.as_str());

    if requested == RemotePreference::Remote {
        return LocationEvaluation {
            score: base,
            details: format!("{arrangement}; location not required"),
        };
    }

    let wanted = normalize_location(&request.location);
    let actual = normalize_location(&profile.location);

    let (adjustment, note) = match (wanted.as_deref(), actual.as_deref()) {
        (Some(w), Some(a)) if w == a => (SAME_LOCATION_BONUS, format!("same location ({w})")),
        (Some(w), Some(a)) => {
            let penalty = if requested == RemotePreference::Onsite {
                ONSITE_DISTANCE_PENALTY
            } else {
                HYBRID_DISTANCE_PENALTY
            };
            (-penalty, format!("different location ({a} vs {w})"))
        }
        _ => (0.0, "location unknown".to_string()),
    };

    LocationEvaluation {
        score: (base + adjustment).clamp(0.0, 1.0),
        details: format!("{arrangement}; {note}"),
    }
}
