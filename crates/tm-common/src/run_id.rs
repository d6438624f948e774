//! Identifiers for matching runs.
//!
//! The process gets one ULID at first access, used to tag logs from the same
//! service instance. Every `MatchingEngine` run draws a fresh ULID so a single
//! ranking can be followed through the logs and echoed back to the caller.

use once_cell::sync::Lazy;
use ulid::Ulid;

static PROCESS_RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Returns the process-level run ID (26 characters, time-ordered).
#[inline]
pub fn process() -> &'static str {
    &PROCESS_RUN_ID
}

/// Generates a fresh ULID for a single matching run.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_id_is_stable() {
        let first = process();
        let second = process();
        assert_eq!(first, second);
        assert_eq!(first.len(), 26);
    }

    #[test]
    fn generate_returns_unique_values() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
        assert_eq!(a.len(), 26);
    }

    #[test]
    fn ulid_is_lexicographically_sortable() {
        let older = generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let newer = generate();
        assert!(older < newer, "ULIDs should be time-ordered");
    }
}
