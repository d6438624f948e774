use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::EngagementDuration;

/// Period a candidate can take on work. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AvailabilityWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= start && end <= self.end
    }

    /// Number of calendar days shared with `[start, end]`.
    pub fn overlap_days(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        let lo = self.start.max(start);
        let hi = self.end.min(end);
        if lo > hi {
            0
        } else {
            (hi - lo).num_days() as u64 + 1
        }
    }
}

/// Inclusive day span a request asks for: `max(days, 1)` days from `start`.
/// No duration means only the start day.
pub fn requested_span(
    start: NaiveDate,
    duration: Option<&EngagementDuration>,
) -> (NaiveDate, NaiveDate) {
    let days = duration.map(EngagementDuration::to_days).unwrap_or(1).max(1);
    let end = start
        .checked_add_days(Days::new(days - 1))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn span_covers_requested_days() {
        let (start, end) = requested_span(d(2025, 3, 1), Some(&EngagementDuration::weeks(2.0)));
        assert_eq!(start, d(2025, 3, 1));
        assert_eq!(end, d(2025, 3, 14));
    }

    #[test]
    fn span_without_duration_is_single_day() {
        let (start, end) = requested_span(d(2025, 3, 1), None);
        assert_eq!(start, end);

        let (_, zero_end) = requested_span(d(2025, 3, 1), Some(&EngagementDuration::days(0.0)));
        assert_eq!(zero_end, d(2025, 3, 1));
    }

    #[test]
    fn overlap_counts_inclusive_days() {
        let window = AvailabilityWindow::new(d(2025, 1, 1), d(2025, 1, 10));
        assert_eq!(window.overlap_days(d(2025, 1, 5), d(2025, 1, 20)), 6);
        assert_eq!(window.overlap_days(d(2025, 1, 10), d(2025, 1, 10)), 1);
        assert_eq!(window.overlap_days(d(2025, 1, 11), d(2025, 1, 20)), 0);
    }

    #[test]
    fn containment_requires_both_edges() {
        let window = AvailabilityWindow::new(d(2025, 1, 1), d(2025, 1, 31));
        assert!(window.contains(d(2025, 1, 1), d(2025, 1, 31)));
        assert!(!window.contains(d(2024, 12, 31), d(2025, 1, 5)));
    }
}
