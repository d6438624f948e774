/// Outcome of a single hard filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterDecision {
    /// The candidate is removed from the run regardless of its scores.
    Reject { reason: String },
    Pass,
}

impl FilterDecision {
    pub fn is_reject(&self) -> bool {
        matches!(self, FilterDecision::Reject { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            FilterDecision::Reject { reason } => Some(reason),
            FilterDecision::Pass => None,
        }
    }
}

/// All hard filter decisions for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct HardFilterResult {
    pub is_rejected: bool,
    /// (filter name, decision)
    pub decisions: Vec<(&'static str, FilterDecision)>,
}

impl HardFilterResult {
    pub fn new(decisions: Vec<(&'static str, FilterDecision)>) -> Self {
        let is_rejected = decisions.iter().any(|(_, d)| d.is_reject());
        Self {
            is_rejected,
            decisions,
        }
    }

    /// `"[name] reason"` for each rejecting filter.
    pub fn rejection_reasons(&self) -> Vec<String> {
        self.decisions
            .iter()
            .filter_map(|(name, d)| d.reason().map(|r| format!("[{name}] {r}")))
            .collect()
    }
}
