//! Static mood catalog
//!
//! Maps mood labels to their categories. The catalog is a fixed table so the
//! UI layer can render pickers from it and the analytics code can resolve
//! labels without any runtime registry.

use crate::models::MoodCategory;

/// Known mood labels and their categories. Lookup is case-insensitive.
pub const MOOD_CATALOG: &[(&str, MoodCategory)] = &[
    // Positive
    ("Happy", MoodCategory::Positive),
    ("Excited", MoodCategory::Positive),
    ("Grateful", MoodCategory::Positive),
    ("Content", MoodCategory::Positive),
    ("Proud", MoodCategory::Positive),
    ("Loved", MoodCategory::Positive),
    ("Energetic", MoodCategory::Positive),
    ("Hopeful", MoodCategory::Positive),
    // Neutral
    ("Calm", MoodCategory::Neutral),
    ("Okay", MoodCategory::Neutral),
    ("Tired", MoodCategory::Neutral),
    ("Bored", MoodCategory::Neutral),
    ("Curious", MoodCategory::Neutral),
    ("Nostalgic", MoodCategory::Neutral),
    // Negative
    ("Sad", MoodCategory::Negative),
    ("Angry", MoodCategory::Negative),
    ("Anxious", MoodCategory::Negative),
    ("Stressed", MoodCategory::Negative),
    ("Lonely", MoodCategory::Negative),
    ("Frustrated", MoodCategory::Negative),
    ("Overwhelmed", MoodCategory::Negative),
];

/// Look up the category for a mood label. Returns None for unknown labels.
pub fn category_for_label(label: &str) -> Option<MoodCategory> {
    let label = label.trim();
    MOOD_CATALOG
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(label))
        .map(|(_, category)| *category)
}

/// All catalog labels in one category, in catalog order.
pub fn labels_in(category: MoodCategory) -> impl Iterator<Item = &'static str> {
    MOOD_CATALOG
        .iter()
        .filter(move |(_, c)| *c == category)
        .map(|(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_for_label("Happy"), Some(MoodCategory::Positive));
        assert_eq!(category_for_label("Calm"), Some(MoodCategory::Neutral));
        assert_eq!(category_for_label("Anxious"), Some(MoodCategory::Negative));
        assert_eq!(category_for_label("Ecstatic"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        assert_eq!(category_for_label("happy"), Some(MoodCategory::Positive));
        assert_eq!(category_for_label(" STRESSED "), Some(MoodCategory::Negative));
    }

    #[test]
    fn test_labels_in_category() {
        let neutral: Vec<_> = labels_in(MoodCategory::Neutral).collect();
        assert!(neutral.contains(&"Calm"));
        assert!(!neutral.contains(&"Happy"));
    }

    #[test]
    fn test_catalog_labels_are_unique() {
        for (i, (label, _)) in MOOD_CATALOG.iter().enumerate() {
            let dup = MOOD_CATALOG
                .iter()
                .skip(i + 1)
                .any(|(other, _)| other.eq_ignore_ascii_case(label));
            assert!(!dup, "duplicate catalog label: {}", label);
        }
    }
}
