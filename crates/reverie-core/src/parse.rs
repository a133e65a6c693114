//! Parsing boundary for entry fields
//!
//! Raw tag strings and free-text word counts are normalized here, once, at
//! the edge of the core. Everything downstream works on the split, trimmed
//! values.

/// Split a raw tag string on `,` and `;`, trimming each token and discarding
/// empty ones. Token order is preserved.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count whitespace-delimited tokens in free text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_list_splits_on_both_delimiters() {
        assert_eq!(parse_tag_list("Work, Health"), vec!["Work", "Health"]);
        assert_eq!(
            parse_tag_list("Work;Health,Travel"),
            vec!["Work", "Health", "Travel"]
        );
    }

    #[test]
    fn test_parse_tag_list_drops_empty_tokens() {
        assert_eq!(parse_tag_list(""), Vec::<String>::new());
        assert_eq!(parse_tag_list(" , ;; ,"), Vec::<String>::new());
        assert_eq!(parse_tag_list("Work,,  ,Health;"), vec!["Work", "Health"]);
    }

    #[test]
    fn test_parse_tag_list_trims_tokens() {
        assert_eq!(parse_tag_list("  Work  ;  Health "), vec!["Work", "Health"]);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("a  quiet\nmorning\twalk"), 4);
    }
}
