//! Streak math over entry dates
//!
//! Computes:
//! - Longest streak: the longest run of consecutive calendar days with entries
//! - Current streak: the run ending at the reference day (or the day before)
//! - Missed days: gaps inside the observed first..=last date span
//!
//! All three always run over the user's full entry history, never over an
//! analytics window. Dates are de-duplicated before any day math, so a second
//! entry on the same day neither extends nor breaks a streak.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Results of a streak scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: usize,
    pub longest: usize,
    pub missed_days: usize,
}

/// Scan entry dates and summarize streaks, anchored at `today`.
///
/// Zero dates yield an all-zero summary.
pub fn summarize(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> StreakSummary {
    let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();
    if distinct.is_empty() {
        return StreakSummary::default();
    }

    StreakSummary {
        current: current_streak(&distinct, today),
        longest: longest_streak(&distinct),
        missed_days: missed_days(&distinct),
    }
}

/// Longest run of consecutive days in the distinct, ascending date set.
/// A single date counts as a streak of 1.
fn longest_streak(dates: &BTreeSet<NaiveDate>) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        run = match prev {
            Some(p) if date - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    longest
}

/// Consecutive days present in the set, counted backward from `today`.
///
/// The streak is broken (0) once the most recent entry is older than
/// yesterday. A missing entry for `today` itself does not break the count
/// while the day is still in progress; the backward walk then starts at
/// yesterday.
fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> usize {
    let Some(&last) = dates.iter().next_back() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    if last < yesterday {
        return 0;
    }

    let mut day = if dates.contains(&today) {
        today
    } else {
        yesterday
    };

    let mut streak = 0;
    while dates.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Days inside the observed span with no entry:
/// `(last - first) + 1 - distinct_count`.
fn missed_days(dates: &BTreeSet<NaiveDate>) -> usize {
    let (Some(&first), Some(&last)) = (dates.iter().next(), dates.iter().next_back()) else {
        return 0;
    };

    let span = (last - first).num_days() as usize + 1;
    span - dates.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(days: &[u32]) -> Vec<NaiveDate> {
        days.iter().map(|&d| date(2024, 1, d)).collect()
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let summary = summarize(Vec::new(), date(2024, 1, 3));
        assert_eq!(summary, StreakSummary::default());
    }

    #[test]
    fn test_unbroken_run_counts_fully() {
        // Entries on Jan 1-3, today is Jan 3
        let summary = summarize(dates(&[1, 2, 3]), date(2024, 1, 3));
        assert_eq!(summary.longest, 3);
        assert_eq!(summary.current, 3);
        assert_eq!(summary.missed_days, 0);
    }

    #[test]
    fn test_gap_resets_longest_and_counts_missed() {
        // Entries on Jan 1 and Jan 3, nothing on Jan 2
        let summary = summarize(dates(&[1, 3]), date(2024, 1, 3));
        assert_eq!(summary.longest, 1);
        assert_eq!(summary.missed_days, 1);
        assert_eq!(summary.current, 1);
    }

    #[test]
    fn test_single_entry_is_streak_of_one() {
        let summary = summarize(dates(&[5]), date(2024, 1, 5));
        assert_eq!(summary.longest, 1);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.missed_days, 0);
    }

    #[test]
    fn test_missing_today_keeps_streak_alive() {
        // Entries on Jan 1-2, today is Jan 3 with no entry yet
        let summary = summarize(dates(&[1, 2]), date(2024, 1, 3));
        assert_eq!(summary.current, 2);
    }

    #[test]
    fn test_last_entry_older_than_yesterday_breaks_streak() {
        let summary = summarize(dates(&[1, 2]), date(2024, 1, 10));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 2);
    }

    #[test]
    fn test_duplicate_dates_are_deduplicated() {
        let mut history = dates(&[1, 2, 3]);
        history.extend(dates(&[2, 2]));
        let summary = summarize(history, date(2024, 1, 3));
        assert_eq!(summary.longest, 3);
        assert_eq!(summary.current, 3);
        assert_eq!(summary.missed_days, 0);
    }

    #[test]
    fn test_longest_tracks_best_run_not_latest() {
        // Jan 1-4 is a 4-day run, Jan 10-11 is the most recent run
        let summary = summarize(dates(&[1, 2, 3, 4, 10, 11]), date(2024, 1, 11));
        assert_eq!(summary.longest, 4);
        assert_eq!(summary.current, 2);
        // Span Jan 1..=11 is 11 days, 6 have entries
        assert_eq!(summary.missed_days, 5);
    }

    #[test]
    fn test_longest_is_never_below_current() {
        for today_day in 1..=12 {
            let summary = summarize(dates(&[1, 2, 3, 7, 8, 9, 10]), date(2024, 1, today_day));
            assert!(summary.longest >= summary.current);
        }
    }
}
