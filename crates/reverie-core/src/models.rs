//! Domain models for Reverie

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::moods;
use crate::parse;

/// Maximum number of secondary moods an entry can carry
pub const MAX_SECONDARY_MOODS: usize = 2;

/// Mood categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Positive,
    Neutral,
    Negative,
}

impl MoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::str::FromStr for MoodCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err(format!("Unknown mood category: {}", s)),
        }
    }
}

impl std::fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A mood label paired with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub label: String,
    pub category: MoodCategory,
}

impl Mood {
    pub fn new(label: impl Into<String>, category: MoodCategory) -> Self {
        Self {
            label: label.into(),
            category,
        }
    }

    /// Resolve a mood from the static catalog. Returns None for labels the
    /// catalog does not know.
    pub fn from_label(label: &str) -> Option<Self> {
        moods::category_for_label(label).map(|category| Self::new(label, category))
    }
}

/// A journal entry
///
/// `entry_date` is the calendar day the entry belongs to, not the creation
/// timestamp. At most one entry per day is expected from storage, but the
/// analytics code tolerates duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub entry_date: NaiveDate,
    pub content: String,
    pub primary_mood: Mood,
    /// Zero, one, or two additional moods
    pub secondary_moods: Vec<Mood>,
    /// Trimmed, non-empty tag tokens
    pub tags: Vec<String>,
    /// Whitespace-delimited token count of `content`
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create an entry, deriving `word_count` from the content.
    pub fn new(
        id: i64,
        entry_date: NaiveDate,
        content: impl Into<String>,
        primary_mood: Mood,
    ) -> Self {
        let content = content.into();
        let word_count = parse::count_words(&content);
        Self {
            id,
            entry_date,
            content,
            primary_mood,
            secondary_moods: Vec::new(),
            tags: Vec::new(),
            word_count,
            created_at: Utc::now(),
        }
    }

    /// Attach secondary moods, keeping at most [`MAX_SECONDARY_MOODS`].
    pub fn with_secondary_moods(mut self, moods: Vec<Mood>) -> Self {
        self.secondary_moods = moods;
        self.secondary_moods.truncate(MAX_SECONDARY_MOODS);
        self
    }

    /// Attach tags from a raw delimiter-separated string (`,` or `;`).
    pub fn with_raw_tags(mut self, raw: &str) -> Self {
        self.tags = parse::parse_tag_list(raw);
        self
    }

    /// Attach pre-split tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// All mood occurrences this entry contributes: primary first, then any
    /// secondary moods.
    pub fn moods(&self) -> impl Iterator<Item = &Mood> {
        std::iter::once(&self.primary_mood).chain(self.secondary_moods.iter())
    }
}

/// An inclusive analytics window. Unbounded ends match everything on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn since(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(Error::InvalidRange { start, end });
            }
        }
        Ok(())
    }
}

/// Count and share of one mood category within the pooled mood occurrences
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodShare {
    pub count: usize,
    /// Percentage of all mood occurrences, rounded to 2 decimals
    pub percentage: f64,
}

/// Mood occurrence counts per category
///
/// An entry contributes one occurrence per present mood (1 to 3), so
/// percentages are shares of occurrences, not of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodDistribution {
    pub positive: MoodShare,
    pub neutral: MoodShare,
    pub negative: MoodShare,
    pub total_occurrences: usize,
}

impl MoodDistribution {
    pub fn share(&self, category: MoodCategory) -> MoodShare {
        match category {
            MoodCategory::Positive => self.positive,
            MoodCategory::Neutral => self.neutral,
            MoodCategory::Negative => self.negative,
        }
    }
}

/// The most frequent primary mood label and how often it occurred
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodFrequency {
    pub label: String,
    pub count: usize,
}

/// Usage of one tag across the analytics window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagUsage {
    pub tag: String,
    pub count: usize,
    /// Percentage of all tag occurrences, rounded to 2 decimals
    pub percentage: f64,
}

/// Analytics report for one user and one analytics window
///
/// Recomputed per call; has no persisted identity. Streak fields always cover
/// the full entry history, the remaining aggregates cover the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_entry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_entry_date: Option<NaiveDate>,
    pub mood_distribution: MoodDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent_mood: Option<MoodFrequency>,
    pub current_streak: usize,
    pub longest_streak: usize,
    pub missed_days: usize,
    /// Ordered by descending count; ties keep first appearance
    pub tag_usage: Vec<TagUsage>,
    pub total_word_count: usize,
    /// Rounded to 2 decimals, 0.0 when the window is empty
    pub average_word_count: f64,
    pub daily_word_counts: BTreeMap<NaiveDate, usize>,
}
