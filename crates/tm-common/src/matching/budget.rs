use crate::{BudgetRange, RateRange};

/// Portion of the budget score that depends on centring rather than overlap.
const CENTERING_SHARE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEvaluation {
    /// Candidate's minimum rate exceeds the budget ceiling.
    pub is_knockout: bool,
    pub score: f64,
    /// Fraction of the candidate's rate band inside the budget band.
    pub coverage: f64,
    /// 1.0 when the band midpoints coincide, falling to 0.0 at a budget edge.
    pub centering: f64,
    pub details: String,
}

/// Scores how well a candidate's rate band sits inside the requester's budget.
///
/// `score = coverage * (0.9 + 0.1 * centering)`. A zero-width band on either
/// side counts as full coverage when the closed intervals touch.
pub fn evaluate_budget(budget: &BudgetRange, rate: &RateRange) -> BudgetEvaluation {
    let currency = if budget.currency.is_empty() {
        String::new()
    } else {
        format!(" {}", budget.currency)
    };

    if rate.min > budget.max {
        return BudgetEvaluation {
            is_knockout: true,
            score: 0.0,
            coverage: 0.0,
            centering: 0.0,
            details: format!(
                "too expensive: minimum rate {:.2} exceeds budget ceiling {:.2}{}",
                rate.min, budget.max, currency
            ),
        };
    }

    let lo = budget.min.max(rate.min);
    let hi = budget.max.min(rate.max);
    let rate_width = rate.max - rate.min;
    let budget_width = budget.max - budget.min;

    let coverage = if lo > hi {
        0.0
    } else if rate_width <= 0.0 || budget_width <= 0.0 {
        1.0
    } else {
        ((hi - lo) / rate_width).clamp(0.0, 1.0)
    };

    let offset = ((rate.min + rate.max) / 2.0 - (budget.min + budget.max) / 2.0).abs();
    let centering = if budget_width > 0.0 {
        (1.0 - offset / (budget_width / 2.0)).clamp(0.0, 1.0)
    } else if offset == 0.0 {
        1.0
    } else {
        0.0
    };

    let score = coverage * ((1.0 - CENTERING_SHARE) + CENTERING_SHARE * centering);

    let details = if coverage == 0.0 {
        format!(
            "rate {:.2}-{:.2} outside budget {:.2}-{:.2}{}",
            rate.min, rate.max, budget.min, budget.max, currency
        )
    } else {
        format!(
            "rate {:.2}-{:.2} vs budget {:.2}-{:.2}{} ({:.0}% inside)",
            rate.min,
            rate.max,
            budget.min,
            budget.max,
            currency,
            coverage * 100.0
        )
    };

    BudgetEvaluation {
        is_knockout: false,
        score,
        coverage,
        centering,
        details,
    }
}
