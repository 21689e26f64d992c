// The stop word list — common function words excluded from frequency
// accounting.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Function words that carry no topical signal.
///
/// Frequency accumulation skips these entirely. Sentence scoring still
/// iterates them, but since they never enter the frequency table they
/// always contribute zero.
pub const STOP_WORDS: [&str; 21] = [
    "the", "is", "in", "and", "to", "a", "of", "for", "on", "with", "as", "at", "an", "this", "it",
    "by", "that", "from", "or", "but", "be",
];

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The stop words as a set, built once per process and never mutated.
pub fn stop_word_set() -> &'static HashSet<&'static str> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Check whether a lowercase word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    stop_word_set().contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_function_words_are_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("be"));
        assert!(is_stop_word("from"));
    }

    #[test]
    fn test_content_words_are_not() {
        assert!(!is_stop_word("cats"));
        assert!(!is_stop_word("great"));
        // "are" looks like a function word but is not on the list
        assert!(!is_stop_word("are"));
    }

    #[test]
    fn test_set_has_no_duplicates() {
        assert_eq!(stop_word_set().len(), STOP_WORDS.len());
    }
}
