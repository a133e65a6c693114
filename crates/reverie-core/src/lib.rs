//! Reverie Core Library
//!
//! Shared functionality for the Reverie journaling tool:
//! - Journal analytics engine (streaks, mood distribution, tag usage,
//!   word-count trends)
//! - Static mood catalog mapping labels to categories
//! - Parsing boundary for delimiter-separated tag strings and word counts
//! - Entry source seam for storage backends

pub mod analytics;
pub mod error;
pub mod models;
pub mod moods;
pub mod parse;
pub mod source;
pub mod streaks;

pub use analytics::{AnalyticsConfig, AnalyticsEngine};
pub use error::{Error, Result};
pub use models::{
    AnalyticsReport, DateRange, Entry, Mood, MoodCategory, MoodDistribution, MoodFrequency,
    MoodShare, TagUsage, MAX_SECONDARY_MOODS,
};
pub use source::{EntrySource, VecSource};
pub use streaks::StreakSummary;
