// Document-level word frequency table.
//
// One pass over the document's words. Stop words never enter the table, so
// every key is a content word and every count is at least one.

use std::collections::HashMap;

use crate::stopwords::is_stop_word;

/// Count content-word occurrences across the whole document.
///
/// Keys are lowercase words as produced by the tokenizer. Stop words are
/// skipped rather than stored with a zero count. Words that sit outside any
/// sentence (a trailing fragment with no terminator) still count — the table
/// is built from the full document, not sentence by sentence.
pub fn word_frequencies(words: &[String]) -> HashMap<String, u32> {
    let mut freq: HashMap<String, u32> = HashMap::new();
    for word in words {
        if !is_stop_word(word) {
            *freq.entry(word.clone()).or_insert(0) += 1;
        }
    }
    freq
}
