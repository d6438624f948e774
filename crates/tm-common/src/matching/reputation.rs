/// Score for candidates nobody has reviewed yet: neither rewarded nor penalised.
pub const NEUTRAL_REPUTATION_SCORE: f64 = 0.5;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ReputationEvaluation {
    /// `None` when reviews exist but no aggregate rating was supplied.
    pub score: Option<f64>,
    pub details: String,
}

/// Normalizes a 0–5 rating to 0–1. Review volume only decides whether the
/// rating is trusted at all; it never raises the score.
pub fn evaluate_reputation(rating: Option<f64>, review_count: u32) -> ReputationEvaluation {
    if review_count == 0 {
        return ReputationEvaluation {
            score: Some(NEUTRAL_REPUTATION_SCORE),
            details: "no reviews yet (neutral)".into(),
        };
    }

    match rating {
        Some(rating) => ReputationEvaluation {
            score: Some((rating / MAX_RATING).clamp(0.0, 1.0)),
            details: format!("rated {rating:.1}/5 from {review_count} reviews"),
        },
        None => ReputationEvaluation {
            score: None,
            details: format!("{review_count} reviews without an aggregate rating"),
        },
    }
}
