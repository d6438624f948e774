use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form of a skill name.
///
/// NFKC folds full-width and compatibility characters, whitespace runs collapse
/// to one space, and the result is lowercased. No aliasing: "JS" and
/// "JavaScript" stay different skills.
pub fn normalize_skill(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalizes a skill list, keeping first-seen order and dropping blanks and duplicates.
pub fn normalize_skill_list(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}
