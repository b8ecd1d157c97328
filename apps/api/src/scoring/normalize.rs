//! Canonical text form used for comparison, never for display.

/// Normalizes a text blob for comparison.
///
/// Order-sensitive steps: lower-case, collapse whitespace runs (including
/// newlines) to single spaces and trim the ends, then strip every character
/// that is not alphanumeric, underscore, or space.
pub fn normalize(text: &str) -> String {
    let collapsed = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    collapsed
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_whitespace_and_punctuation() {
        assert_eq!(normalize("  Hello,  World!!  "), "hello world");
    }

    #[test]
    fn test_newlines_collapse_to_spaces() {
        assert_eq!(normalize("one\ntwo\r\n\tthree"), "one two three");
    }

    #[test]
    fn test_underscores_and_digits_survive() {
        assert_eq!(normalize("user_42 rocks!"), "user_42 rocks");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_unicode_letters_survive_casefold() {
        assert_eq!(normalize("Éclair Café"), "éclair café");
    }

    #[test]
    fn test_stripped_punctuation_leaves_space_gap() {
        // whitespace collapses before punctuation is stripped, so a
        // freestanding dash leaves a double space behind
        assert_eq!(normalize("a - b"), "a  b");
    }
}
