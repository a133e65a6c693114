//! Journal analytics engine
//!
//! Computes, from a snapshot of a user's entries:
//! - Streak statistics (current, longest, missed days) over the full history
//! - Mood distribution over pooled primary + secondary mood occurrences
//! - Most frequent primary mood
//! - Tag usage counts and percentages
//! - Word-count totals, averages, and per-day sums
//!
//! The engine holds no state between calls and never mutates its input. Mood,
//! tag, and word aggregates cover the requested window; streaks always cover
//! the whole history so the current streak reads the same no matter which
//! window is on screen.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::Result;
use crate::models::{
    AnalyticsReport, DateRange, Entry, MoodCategory, MoodDistribution, MoodFrequency, MoodShare,
    TagUsage,
};
use crate::source::EntrySource;
use crate::streaks;

/// Analytics configuration
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Anchor day for current-streak math. None means the local calendar
    /// date at call time.
    pub reference_date: Option<NaiveDate>,
}

/// Stateless compute unit producing [`AnalyticsReport`]s
#[derive(Debug, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self {
            config: AnalyticsConfig::default(),
        }
    }

    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Compute a report over `entries`, windowed to `range`.
    ///
    /// `entries` is the user's full history; streak fields are computed from
    /// it regardless of the window. Errors only when the range bounds are
    /// inverted. An empty window yields a zeroed report.
    pub fn compute(&self, entries: &[Entry], range: &DateRange) -> Result<AnalyticsReport> {
        range.validate()?;

        let filtered: Vec<&Entry> = entries
            .iter()
            .filter(|entry| range.contains(entry.entry_date))
            .collect();

        if filtered.is_empty() {
            debug!("No entries in analytics window, returning empty report");
            return Ok(AnalyticsReport::default());
        }

        let first_entry_date = filtered.iter().map(|e| e.entry_date).min();
        let last_entry_date = filtered.iter().map(|e| e.entry_date).max();

        let streaks = streaks::summarize(
            entries.iter().map(|e| e.entry_date),
            self.reference_date(),
        );

        let mood_distribution = mood_distribution(&filtered);
        let most_frequent_mood = most_frequent_primary(&filtered);
        let tag_usage = tag_usage(&filtered);
        let (total_word_count, average_word_count, daily_word_counts) = word_trends(&filtered);

        debug!(
            entries = filtered.len(),
            mood_occurrences = mood_distribution.total_occurrences,
            current_streak = streaks.current,
            longest_streak = streaks.longest,
            "Analytics report computed"
        );

        Ok(AnalyticsReport {
            total_entries: filtered.len(),
            first_entry_date,
            last_entry_date,
            mood_distribution,
            most_frequent_mood,
            current_streak: streaks.current,
            longest_streak: streaks.longest,
            missed_days: streaks.missed_days,
            tag_usage,
            total_word_count,
            average_word_count,
            daily_word_counts,
        })
    }

    /// Fetch the full history from `source` and compute a windowed report.
    ///
    /// Fetching unwindowed is what keeps streak fields covering the whole
    /// history even when `range` is narrow.
    pub fn report_from(
        &self,
        source: &dyn EntrySource,
        range: &DateRange,
    ) -> Result<AnalyticsReport> {
        let entries = source.entries()?;
        self.compute(&entries, range)
    }

    fn reference_date(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Count pooled mood occurrences per category. Each entry contributes its
/// primary mood plus any secondary moods, each with its own category.
fn mood_distribution(entries: &[&Entry]) -> MoodDistribution {
    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;

    for entry in entries {
        for mood in entry.moods() {
            match mood.category {
                MoodCategory::Positive => positive += 1,
                MoodCategory::Neutral => neutral += 1,
                MoodCategory::Negative => negative += 1,
            }
        }
    }

    let total = positive + neutral + negative;
    MoodDistribution {
        positive: MoodShare {
            count: positive,
            percentage: percent_of(positive, total),
        },
        neutral: MoodShare {
            count: neutral,
            percentage: percent_of(neutral, total),
        },
        negative: MoodShare {
            count: negative,
            percentage: percent_of(negative, total),
        },
        total_occurrences: total,
    }
}

/// Most frequent primary mood label. Secondary moods are excluded here; ties
/// go to the label encountered first in entry order.
fn most_frequent_primary(entries: &[&Entry]) -> Option<MoodFrequency> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        let label = entry.primary_mood.label.as_str();
        match counts.iter_mut().find(|(known, _)| *known == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }

    best.map(|(label, count)| MoodFrequency {
        label: label.to_string(),
        count,
    })
}

/// Pool all tags of the window, count per tag, and order by descending count.
/// Ties keep first appearance. An empty pool yields an empty list rather than
/// zero-count rows.
fn tag_usage(entries: &[&Entry]) -> Vec<TagUsage> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        for tag in &entry.tags {
            match counts.iter_mut().find(|(known, _)| *known == tag.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag.as_str(), 1)),
            }
        }
    }

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    // sort_by is stable, so equal counts stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(tag, count)| TagUsage {
            tag: tag.to_string(),
            count,
            percentage: percent_of(count, total),
        })
        .collect()
}

/// Word totals and per-day sums. Multiple entries on one date are summed.
fn word_trends(entries: &[&Entry]) -> (usize, f64, BTreeMap<NaiveDate, usize>) {
    let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut total = 0usize;

    for entry in entries {
        total += entry.word_count;
        *daily.entry(entry.entry_date).or_insert(0) += entry.word_count;
    }

    let average = round2(total as f64 / entries.len() as f64);
    (total, average, daily)
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(count as f64 / total as f64 * 100.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
