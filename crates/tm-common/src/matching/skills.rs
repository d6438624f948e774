use crate::skill_normalizer::{normalize_skill_list, normalize_skill_set};

/// Share of the skill score carried by required-skill coverage.
pub const REQUIRED_SKILL_SHARE: f64 = 0.8;
/// Share of the skill score carried by preferred-skill coverage.
pub const PREFERRED_SKILL_SHARE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    /// Some required skill is missing; the candidate must be dropped.
    pub is_knockout: bool,
    pub score: f64,
    pub required_coverage: f64,
    pub preferred_coverage: f64,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub reason: String,
}

/// Scores a candidate's skills against required and preferred lists.
///
/// Comparison is exact after case/whitespace folding. Empty lists count as
/// fully covered, so a request without preferred skills lets required
/// coverage reach 1.0 on its own.
pub fn evaluate_skills(
    required: &[String],
    preferred: &[String],
    candidate: &[String],
) -> SkillMatchResult {
    let required = normalize_skill_list(required);
    let preferred = normalize_skill_list(preferred);
    let candidate = normalize_skill_set(candidate);

    let (matched_required, missing_required): (Vec<_>, Vec<_>) = required
        .iter()
        .cloned()
        .partition(|skill| candidate.contains(skill));
    let matched_preferred: Vec<_> = preferred
        .iter()
        .filter(|skill| candidate.contains(*skill))
        .cloned()
        .collect();

    let required_coverage = coverage(matched_required.len(), required.len());
    let preferred_coverage = coverage(matched_preferred.len(), preferred.len());
    let is_knockout = !missing_required.is_empty();

    let score = if is_knockout {
        0.0
    } else {
        REQUIRED_SKILL_SHARE * required_coverage + PREFERRED_SKILL_SHARE * preferred_coverage
    };

    let required_note = if required.is_empty() {
        "no required skills".to_string()
    } else {
        format!(
            "required {}/{} ({})",
            matched_required.len(),
            required.len(),
            if missing_required.is_empty() {
                matched_required.join(", ")
            } else {
                format!("missing: {}", missing_required.join(", "))
            }
        )
    };
    let preferred_note = if preferred.is_empty() {
        "no preferred skills".to_string()
    } else {
        format!("preferred {}/{}", matched_preferred.len(), preferred.len())
    };

    SkillMatchResult {
        is_knockout,
        score,
        required_coverage,
        preferred_coverage,
        matched_required,
        missing_required,
        matched_preferred,
        reason: format!("{required_note}; {preferred_note}"),
    }
}

fn coverage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        matched as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_required_match_without_preferences_scores_one() {
        let result = evaluate_skills(
            &skills(&["React", "TypeScript", "Node.js"]),
            &[],
            &skills(&["react", "typescript", "node.js", "graphql"]),
        );

        assert!(!result.is_knockout);
        assert_eq!(result.score, 1.0);
        assert!(result.reason.contains("required 3/3"));
    }

    #[test]
    fn missing_required_skill_is_knockout() {
        let result = evaluate_skills(
            &skills(&["React", "TypeScript", "Node.js"]),
            &[],
            &skills(&["React", "JavaScript"]),
        );

        assert!(result.is_knockout);
        assert_eq!(result.score, 0.0);
        assert!((result.required_coverage - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.missing_required, vec!["typescript", "node.js"]);
        assert!(result.reason.contains("missing: typescript, node.js"));
    }

    #[test]
    fn preferred_skills_add_proportional_credit() {
        let result = evaluate_skills(
            &skills(&["Rust"]),
            &skills(&["Tokio", "gRPC", "Kafka", "Postgres"]),
            &skills(&["rust", "tokio"]),
        );

        assert!(!result.is_knockout);
        assert!((result.preferred_coverage - 0.25).abs() < 1e-9);
        assert!((result.score - (0.8 + 0.2 * 0.25)).abs() < 1e-9);
        assert_eq!(result.matched_preferred, vec!["tokio"]);
    }

    #[test]
    fn empty_required_list_defaults_to_full_coverage() {
        let result = evaluate_skills(&[], &skills(&["Figma"]), &[]);

        assert!(!result.is_knockout);
        assert_eq!(result.required_coverage, 1.0);
        assert!((result.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn synonyms_are_not_matched() {
        let result = evaluate_skills(&skills(&["JavaScript"]), &[], &skills(&["JS"]));
        assert!(result.is_knockout);
    }
}
